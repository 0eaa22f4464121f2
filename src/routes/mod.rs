/// Router Module Index
///
/// Routes are split by access level so the guard is applied once per module
/// (as a route layer) instead of inside every handler. All three routers use
/// full paths and are merged at the top level; a path served by several
/// modules (e.g. `GET /courses` public, `POST /courses` admin) ends up as one
/// method router with a per-method guard.

/// No guard. Site content reads, login/register and the contact form.
pub mod public;

/// Any valid, active admin session (`auth_middleware`).
pub mod authenticated;

/// Content management; requires the `admin` role (`admin_middleware`).
pub mod admin;
