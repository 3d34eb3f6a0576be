//! Project dataset loading.
//!
//! A dataset is a JSON array of projects matching the model's data
//! contract. Loading is the only fallible step in the pipeline; every
//! transform downstream is total.

use crate::error::{DataErrorKind, DepscopeError, Result};
use crate::model::Project;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Projects keyed by name, in file order.
pub type ProjectMap = IndexMap<String, Project>;

/// Load a dataset file into a name-keyed project map.
///
/// Later entries with a duplicate name overwrite earlier ones. An empty
/// dataset is an error; the shell has nothing to show without at least one
/// project.
pub fn load_projects(path: &Path) -> Result<ProjectMap> {
    let raw = fs::read_to_string(path).map_err(|e| DepscopeError::io(path, e))?;
    let projects: Vec<Project> = serde_json::from_str(&raw).map_err(|e| {
        DepscopeError::data(
            path.display().to_string(),
            DataErrorKind::InvalidJson(e.to_string()),
        )
    })?;

    if projects.is_empty() {
        return Err(DepscopeError::data(
            path.display().to_string(),
            DataErrorKind::EmptyDataset,
        ));
    }

    tracing::debug!(
        path = %path.display(),
        count = projects.len(),
        "loaded project dataset"
    );

    Ok(projects
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect())
}

/// Select a project by name, or the first project when no name is given.
pub fn select_project<'a>(projects: &'a ProjectMap, name: Option<&str>) -> Result<&'a Project> {
    match name {
        Some(name) => projects.get(name).ok_or_else(|| {
            DepscopeError::data(
                format!("available: {}", project_names(projects).join(", ")),
                DataErrorKind::UnknownProject(name.to_string()),
            )
        }),
        None => projects
            .values()
            .next()
            .ok_or_else(|| DepscopeError::data("dataset", DataErrorKind::EmptyDataset)),
    }
}

fn project_names(projects: &ProjectMap) -> Vec<&str> {
    projects.keys().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"[
        {
            "name": "storefront",
            "totalDependencies": 2,
            "directDependencies": 1,
            "devDependencies": 1,
            "vulnerabilities": 0,
            "outdatedDependencies": 0,
            "dependencies": [
                {"name": "react", "version": "18.2.0", "kind": "direct", "sizeClass": "large", "status": "active"}
            ]
        }
    ]"#;

    fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write dataset");
        file
    }

    #[test]
    fn test_load_minimal_dataset() {
        let file = write_dataset(MINIMAL);
        let projects = load_projects(file.path()).expect("dataset should load");
        assert_eq!(projects.len(), 1);
        let project = select_project(&projects, None).unwrap();
        assert_eq!(project.name, "storefront");
        assert_eq!(project.dependencies.len(), 1);
    }

    #[test]
    fn test_select_unknown_project_fails() {
        let file = write_dataset(MINIMAL);
        let projects = load_projects(file.path()).unwrap();
        let err = select_project(&projects, Some("backend")).unwrap_err();
        assert!(err.to_string().contains("storefront"));
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let file = write_dataset("[]");
        assert!(load_projects(file.path()).is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let file = write_dataset("{not json");
        let err = load_projects(file.path()).unwrap_err();
        assert!(matches!(err, DepscopeError::Data { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_projects(Path::new("/nonexistent/projects.json")).unwrap_err();
        assert!(matches!(err, DepscopeError::Io { .. }));
    }
}
