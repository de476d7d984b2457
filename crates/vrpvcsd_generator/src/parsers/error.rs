use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid instance file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Instance {instance} has no vehicles")]
    EmptyVehicles { instance: usize },

    #[error("Instance {instance}: {table} row {row} has {columns} columns, expected at least {expected}")]
    MalformedRow {
        instance: usize,
        table: &'static str,
        row: usize,
        columns: usize,
        expected: usize,
    },

    #[error("Instance {instance}: real_n {real_n} exceeds {rows} customer rows")]
    RealCountExceedsRows {
        instance: usize,
        real_n: usize,
        rows: usize,
    },
}
