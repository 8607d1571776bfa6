//! Test-only fixtures: sample source files and a throwaway project root.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::io::config::{DEFAULT_CLIENT_API, DEFAULT_SERVER_ROUTES};

/// Login route whose password guard sits inside an enclosing block.
pub const ROUTES_FIXTURE: &str = r#"import type { Express } from "express";

export async function registerRoutes(app: Express) {
  app.post("/api/auth/login", async (req, res) => {
    const { email, password } = req.body;
    const user = await storage.getUserByEmail(email);

    // Verify password
    if (user) {
      const isValidPassword = await bcrypt.compare(password, user.passwordHash);
      if (!isValidPassword) {
        return res.status(401).json({ error: "Invalid credentials" });
      }
    }

    // Generate JWT token
    const token = jwt.sign({ userId: user.id }, JWT_SECRET, { expiresIn: "7d" });
    res.json({ token, user });
  });
}
"#;

/// Client helper still attaching a bearer token from local storage.
pub const CLIENT_API_FIXTURE: &str = r#"export const apiRequest = async (url: string, options: RequestInit = {}) => {
  // Build headers with JWT
  const token = localStorage.getItem('token');
  const headers: Record<string, string> = {
    'Content-Type': 'application/json',
    ...options.headers as Record<string, string>,
  };
  if (token) {
    headers['Authorization'] = `Bearer ${token}`;
  }

  return fetch(url, {
    ...options,
    headers,
  });
};
"#;

/// [`CLIENT_API_FIXTURE`] after the apiRequest rewrite.
pub const CLIENT_API_PATCHED: &str = r#"export const apiRequest = async (url: string, options: RequestInit = {}) => {
  // Build headers with session credentials
  const headers: Record<string, string> = {
    'Content-Type': 'application/json',
    ...options.headers as Record<string, string>,
  };

  return fetch(url, {
    ...options,
    headers,
    credentials: 'include', // Send session cookies
  });
};
"#;

/// Route file with `count` endpoints using the session-or-JWT auth check.
pub fn routes_with_auth_checks(count: usize) -> String {
    let mut buf = String::from("export async function registerRoutes(app: Express) {\n");
    for i in 0..count {
        buf.push_str(&format!(
            "  app.get(\"/api/files/{i}/preview\", async (req, res) => {{\n    const userId = req.session?.userId || req.user?.id;\n    if (!userId) return res.sendStatus(401);\n  }});\n"
        ));
    }
    buf.push_str("}\n");
    buf
}

/// Temporary project root laid out like the patched application.
pub struct FixtureProject {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl FixtureProject {
    /// Create a root with both target files at their default paths.
    pub fn new(routes: &str, client_api: &str) -> Self {
        let project = Self::empty();
        project.write(DEFAULT_SERVER_ROUTES, routes);
        project.write(DEFAULT_CLIENT_API, client_api);
        project
    }

    /// Create a root with no files in it.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: impl AsRef<Path>, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture file");
    }

    pub fn read(&self, rel: impl AsRef<Path>) -> String {
        fs::read_to_string(self.path(rel)).expect("read fixture file")
    }
}
