//! The Bug #11 fix set: session-based auth for login, auth checks and the
//! client request helper.
//!
//! Fixes run in the order of [`BUG_11_FIXES`]. Each one is independent of the
//! others, but #11.2 targets the same file as #11.1 and sees its output.

use super::rewrite::Rewrite;

/// Which configured file a fix rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Server-side route definitions (`server/routes.ts` by default).
    ServerRoutes,
    /// Client-side request helper (`client/src/lib/api.ts` by default).
    ClientApi,
}

/// One step of the fix set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fix {
    /// Label used in progress output (e.g. `Fix #11.1`).
    pub id: &'static str,
    /// What the fix does, printed when it starts.
    pub summary: &'static str,
    pub target: Target,
    pub rewrite: Rewrite,
}

impl Fix {
    pub fn start_line(&self) -> String {
        format!("{}: {}...", self.id, self.summary)
    }

    pub fn complete_line(&self) -> String {
        format!("✓ {} complete", self.id)
    }
}

pub const SESSION_USER_LINE: &str = "req.session.userId = user.id;";
pub const AUTH_CHECK_EXPR: &str = "req.session?.userId || req.user?.id";
pub const SESSION_AUTH_CHECK_EXPR: &str = "req.session?.userId";

/// Insert the session assignment between the password guard and JWT generation.
///
/// Group 1 ends at the guard's closing brace plus the brace that closes the
/// enclosing block; group 2 is the JWT comment. Once the line is inserted the
/// anchors are no longer adjacent, so a second run matches nothing.
pub const INJECT_SESSION_USER: Fix = Fix {
    id: "Fix #11.1",
    summary: "Adding req.session.userId to login endpoint",
    target: Target::ServerRoutes,
    rewrite: Rewrite::Regex {
        pattern: r"((?:// Verify password.*?)?if \(!isValidPassword\) \{.*?\}\s*\})\s*(// Generate JWT token)",
        replacement: "${1}\n\n    // Set session userId for session-based auth\n    req.session.userId = user.id;\n\n    ${2}",
    },
};

/// Drop the JWT fallback from session auth checks.
pub const SIMPLIFY_AUTH_CHECKS: Fix = Fix {
    id: "Fix #11.2",
    summary: "Simplifying auth checks",
    target: Target::ServerRoutes,
    rewrite: Rewrite::Literal {
        needle: AUTH_CHECK_EXPR,
        replacement: SESSION_AUTH_CHECK_EXPR,
    },
};

/// Replace the JWT header construction in `apiRequest` with cookie credentials.
pub const SESSION_API_REQUEST: Fix = Fix {
    id: "Fix #11.3 & #11.4",
    summary: "Updating apiRequest",
    target: Target::ClientApi,
    rewrite: Rewrite::Regex {
        pattern: r"(export const apiRequest = async \(url: string, options: RequestInit = \{\}\) => \{\s*)// Build headers.*?\}\);",
        replacement: API_REQUEST_BODY,
    },
};

const API_REQUEST_BODY: &str = "${1}// Build headers with session credentials
  const headers: Record<string, string> = {
    'Content-Type': 'application/json',
    ...options.headers as Record<string, string>,
  };

  return fetch(url, {
    ...options,
    headers,
    credentials: 'include', // Send session cookies
  });";

pub const BUG_11_FIXES: [Fix; 3] = [
    INJECT_SESSION_USER,
    SIMPLIFY_AUTH_CHECKS,
    SESSION_API_REQUEST,
];

pub const BANNER: &str = "Applying Bug #11 fixes...";
pub const SUMMARY: &str = "✅ All Bug #11 backend and frontend fixes applied!";
pub const FOLLOW_UP: &str = "Next: Remove localStorage JWT from Login component manually";
