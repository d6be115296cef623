use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary directory holding source files for CLI tests
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a new temporary workspace
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file (and its parent directories) in the workspace
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}

/// `sortify` command isolated from the user's configuration
pub fn sortify(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sortify"));
    cmd.current_dir(workspace.root())
        .env("XDG_CONFIG_HOME", workspace.root().join(".config"))
        .env("HOME", workspace.root());
    cmd
}
