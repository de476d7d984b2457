use std::path::{Path, PathBuf};

pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// `path` itself when it is a file, otherwise every `.json` file below it.
pub fn json_files(path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = read_folder(path)?;
    files.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_files_skips_scenario_files() {
        let folder = std::env::temp_dir().join(format!("vrpvcsd_cli_{}", std::process::id()));
        let nested = folder.join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(folder.join("0_instances.json"), "[]").unwrap();
        std::fs::write(folder.join("0_instances.json_0"), "[]").unwrap();
        std::fs::write(nested.join("2_instances.json"), "[]").unwrap();

        let files = json_files(&folder).unwrap();

        assert_eq!(
            files,
            vec![
                folder.join("0_instances.json"),
                nested.join("2_instances.json"),
            ]
        );

        std::fs::remove_dir_all(&folder).unwrap();
    }
}
