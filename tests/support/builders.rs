use deporder::dependency::Dependency;
use deporder::project::ProjectModel;

/// Dependency with an explicit scope.
pub fn scoped(group_id: &str, artifact_id: &str, scope: &str) -> Dependency {
    Dependency::new(group_id, artifact_id).with_scope(scope)
}

/// Dependency with no scope declared.
pub fn unscoped(group_id: &str, artifact_id: &str) -> Dependency {
    Dependency::new(group_id, artifact_id)
}

pub struct ManifestBuilder {
    name: Option<String>,
    dependencies: Vec<Dependency>,
    managed: Option<Vec<Dependency>>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            dependencies: Vec::new(),
            managed: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn dependency(mut self, dep: Dependency) -> Self {
        self.dependencies.push(dep);
        self
    }

    pub fn managed(mut self, dep: Dependency) -> Self {
        self.managed.get_or_insert_with(Vec::new).push(dep);
        self
    }

    pub fn build(self) -> ProjectModel {
        let mut project = ProjectModel::new(self.dependencies);
        project.name = self.name;
        project.dependency_management = self.managed;
        project
    }

    pub fn to_yaml(self) -> String {
        serde_yaml::to_string(&self.build()).expect("Failed to serialize manifest")
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The common Maven starter: two compile dependencies followed by test ones.
pub fn mixed_scopes() -> Vec<Dependency> {
    vec![
        scoped("com.google.guava", "guava", "compile"),
        scoped("org.apache.commons", "commons-lang3", "compile"),
        scoped("junit", "junit", "test"),
        scoped("org.mockito", "mockito-core", "test"),
    ]
}
