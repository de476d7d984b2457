use std::{fs::File, io::BufReader, path::Path};

use tracing::{debug, instrument, warn};

use crate::{
    generator::density_class::DensityClassTable,
    json::types::JsonInstance,
    parsers::{error::LoadError, parser::InstanceParser},
    problem::{
        customer::{CUSTOMER_COLUMNS, Customer},
        instance::Instance,
        vehicle::{VEHICLE_COLUMNS, Vehicle},
    },
};

/// Reads persisted instance collections, including files written with a
/// leading index column.
pub struct LegacyInstanceParser;

impl InstanceParser for LegacyInstanceParser {
    #[instrument(skip_all, level = "debug", fields(file = %file.as_ref().display()))]
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<Vec<Instance>, LoadError> {
        let reader = BufReader::new(File::open(&file)?);
        let records: Vec<JsonInstance> = serde_json::from_reader(reader)?;

        normalize_records(
            records,
            density_class_hint(file.as_ref(), &DensityClassTable::default()),
        )
    }
}

/// Column layout of a persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// Rows start with a row index column.
    Indexed,
    Plain,
}

impl ColumnLayout {
    /// A first vehicle value of exactly 0 marks an index column.
    pub fn detect(vehicles: &[Vec<f64>]) -> Option<Self> {
        let first = vehicles.first()?.first()?;
        if *first == 0.0 {
            Some(ColumnLayout::Indexed)
        } else {
            Some(ColumnLayout::Plain)
        }
    }

    fn offset(self) -> usize {
        match self {
            ColumnLayout::Indexed => 1,
            ColumnLayout::Plain => 0,
        }
    }
}

/// Leading `"<class>_"` of the file name, e.g. `3_test_instances.json`.
/// Classes missing from `table` are ignored.
pub fn density_class_hint(path: &Path, table: &DensityClassTable) -> Option<u8> {
    let class: u8 = path
        .file_name()?
        .to_str()?
        .split('_')
        .next()?
        .parse()
        .ok()?;

    if let Err(err) = table.get(class) {
        warn!(file = %path.display(), "ignoring density class prefix: {}", err);
        return None;
    }

    Some(class)
}

pub fn normalize_records(
    records: Vec<JsonInstance>,
    density_class: Option<u8>,
) -> Result<Vec<Instance>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| normalize_record(position, record, density_class))
        .collect()
}

fn normalize_record(
    position: usize,
    record: JsonInstance,
    density_class: Option<u8>,
) -> Result<Instance, LoadError> {
    let layout = ColumnLayout::detect(&record.vehicles)
        .ok_or(LoadError::EmptyVehicles { instance: position })?;
    debug!(instance = position, ?layout, "detected column layout");

    let vehicles = slice_rows::<VEHICLE_COLUMNS>(position, "vehicle", &record.vehicles, layout)?
        .into_iter()
        .map(Vehicle::from_row)
        .collect::<Vec<_>>();

    let mut customers =
        slice_rows::<CUSTOMER_COLUMNS>(position, "customer", &record.customers, layout)?
            .into_iter()
            .map(Customer::from_row)
            .collect::<Vec<_>>();

    let mut config = record.config;
    if config.real_n > customers.len() {
        return Err(LoadError::RealCountExceedsRows {
            instance: position,
            real_n: config.real_n,
            rows: customers.len(),
        });
    }

    // Stored files may carry stale unserved demand on padding rows.
    for customer in &mut customers[config.real_n..] {
        customer.clear_unserved_demand();
    }

    if let Some(density_class) = density_class {
        config.density_class = density_class;
    }

    let name = match record.name {
        serde_json::Value::String(name) => name,
        _ => position.to_string(),
    };

    Ok(Instance::new(name, config, vehicles, customers))
}

fn slice_rows<const N: usize>(
    instance: usize,
    table: &'static str,
    rows: &[Vec<f64>],
    layout: ColumnLayout,
) -> Result<Vec<[f64; N]>, LoadError> {
    let offset = layout.offset();

    rows.iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .get(offset..offset + N)
                .and_then(|columns| <[f64; N]>::try_from(columns).ok())
                .ok_or(LoadError::MalformedRow {
                    instance,
                    table,
                    row,
                    columns: values.len(),
                    expected: offset + N,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::rngs::SmallRng;

    use super::*;
    use crate::{
        generator::{
            generation_params::GenerationParams, instance_generator::InstanceGenerator,
            random_sources::RandomSources,
        },
        json::writer::write_instances,
        problem::instance_config::InstanceConfig,
        test_utils::{create_test_instance, temp_path},
    };

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    fn record(vehicles: Vec<Vec<f64>>, customers: Vec<Vec<f64>>, real_n: usize) -> JsonInstance {
        JsonInstance {
            vehicles,
            customers,
            config: InstanceConfig {
                real_n,
                ..InstanceConfig::default()
            },
            name: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_detect_layout() {
        assert_eq!(
            ColumnLayout::detect(&[vec![0.0, 50.0, 50.0, 50.0, 0.0, 12.0]]),
            Some(ColumnLayout::Indexed)
        );
        assert_eq!(
            ColumnLayout::detect(&[vec![50.0, 50.0, 50.0, 0.0, 12.0]]),
            Some(ColumnLayout::Plain)
        );
        assert_eq!(ColumnLayout::detect(&[]), None);
    }

    #[test]
    fn test_density_class_hint() {
        let table = DensityClassTable::default();

        assert_eq!(
            density_class_hint(Path::new("data/3_test.json"), &table),
            Some(3)
        );
        assert_eq!(
            density_class_hint(Path::new("3/instances.json"), &table),
            None
        );
        assert_eq!(density_class_hint(Path::new("test_3.json"), &table), None);
    }

    #[test]
    fn test_unknown_density_class_prefix_keeps_stored_class() {
        let table = DensityClassTable::default();
        assert_eq!(density_class_hint(Path::new("9_test.json"), &table), None);

        let path = temp_path("unknown_class");
        std::fs::create_dir_all(&path).unwrap();
        let file = path.join("9_instances.json");
        let instance = create_test_instance();
        write_instances(&file, std::slice::from_ref(&instance)).unwrap();

        let loaded = LegacyInstanceParser.parse(&file).unwrap().remove(0);
        assert_eq!(
            loaded.config().density_class,
            instance.config().density_class
        );

        std::fs::remove_dir_all(&path).unwrap();
    }

    #[test]
    fn test_plain_layout_zeroes_stale_padding_demand() {
        let records = vec![record(
            vec![vec![50.0, 50.0, 50.0, 0.0, 3.0]],
            vec![
                vec![10.0, 10.0, 1.0, 5.0, -1.0],
                vec![0.0, 0.0, 0.0, 0.0, -1.0],
                vec![0.0, 0.0, 0.0, 0.0, 7.0],
            ],
            1,
        )];

        let instances = normalize_records(records, None).unwrap();
        let instance = &instances[0];

        assert_eq!(instance.name(), "0");
        assert_eq!(instance.customers()[0].unserved_demand(), -1.0);
        assert!(instance.padding_customers().iter().all(Customer::is_padding));
    }

    #[test]
    fn test_indexed_layout_drops_index_column() {
        let records = vec![record(
            vec![
                vec![0.0, 50.0, 50.0, 75.0, 0.0, 2.0],
                vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            ],
            vec![
                vec![0.0, 12.0, 33.0, 1.0, 10.0, -1.0, 99.0],
                vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 99.0],
            ],
            1,
        )];

        let instance = normalize_records(records, Some(2)).unwrap().remove(0);

        assert_eq!(instance.vehicles()[0].to_row(), [50.0, 50.0, 75.0, 0.0, 2.0]);
        assert_eq!(instance.customers()[0].to_row(), [12.0, 33.0, 1.0, 10.0, -1.0]);
        assert!(instance.customers()[1].is_padding());
        assert_eq!(instance.config().density_class, 2);
    }

    #[test]
    fn test_malformed_rows() {
        let records = vec![record(
            vec![vec![50.0, 50.0, 50.0, 0.0, 3.0]],
            vec![vec![10.0, 10.0, 1.0]],
            1,
        )];

        assert!(matches!(
            normalize_records(records, None),
            Err(LoadError::MalformedRow {
                table: "customer",
                row: 0,
                columns: 3,
                ..
            })
        ));

        let records = vec![record(vec![], vec![], 0)];
        assert!(matches!(
            normalize_records(records, None),
            Err(LoadError::EmptyVehicles { instance: 0 })
        ));
    }

    #[test]
    fn test_real_n_beyond_rows() {
        let records = vec![record(
            vec![vec![50.0, 50.0, 50.0, 0.0, 1.0]],
            vec![vec![10.0, 10.0, 1.0, 5.0, -1.0]],
            2,
        )];

        assert!(matches!(
            normalize_records(records, None),
            Err(LoadError::RealCountExceedsRows { real_n: 2, rows: 1, .. })
        ));
    }

    #[test]
    fn test_truncated_file() {
        let path = temp_path("truncated_instances.json");
        std::fs::write(&path, r#"[{"Vehicles": [[50, 50"#).unwrap();

        assert!(matches!(
            LegacyInstanceParser.parse(&path),
            Err(LoadError::Json(_))
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_indexed_fixture() {
        let instances = LegacyInstanceParser
            .parse(fixture("1_indexed_instances.json"))
            .unwrap();

        assert_eq!(instances.len(), 2);

        let first = &instances[0];
        assert_eq!(first.name(), "0");
        assert_eq!(first.config().density_class, 1);
        assert_eq!(first.config().real_n, 3);
        assert_eq!(first.customer_slots(), 5);
        assert_eq!(first.vehicle_slots(), 2);
        assert_eq!(first.customers()[1].to_row(), [27.0, 4.0, 1.0, 10.0, -1.0]);
        assert!(first.padding_customers().iter().all(Customer::is_padding));
        assert_eq!(first.config().extra["stoch_type"], "binomial");

        let second = &instances[1];
        assert_eq!(second.name(), "I_1_2_50_123456");
        assert_eq!(second.config().real_n, 2);
        assert!(second.padding_customers().iter().all(Customer::is_padding));
    }

    #[test]
    fn test_round_trip_preserves_arrays() {
        let path = temp_path("legacy_round_trip.json");
        let instance = create_test_instance();
        write_instances(&path, std::slice::from_ref(&instance)).unwrap();

        let loaded = LegacyInstanceParser.parse(&path).unwrap().remove(0);

        assert_eq!(loaded, instance);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_round_trip_generated_instances() {
        let path = temp_path("generated_round_trip.json");
        let params = GenerationParams {
            density_class_list: vec![0, 2, 4],
            capacity_list: vec![50.0, 75.0],
            count: 4,
            ..GenerationParams::default()
        };
        let mut rngs = RandomSources::<SmallRng>::seeded(5);
        let generated = InstanceGenerator::default()
            .generate(&InstanceConfig::default(), &params, &mut rngs)
            .unwrap();
        write_instances(&path, &generated).unwrap();

        let loaded = LegacyInstanceParser.parse(&path).unwrap();

        assert_eq!(loaded, generated);

        std::fs::remove_file(&path).unwrap();
    }
}
