//! Domain primitives, session transitions and page view models.
//!
//! Purpose: keep every rule of the dashboard (who may see which page, how a
//! session moves between pages, what each page shows) free of HTTP and
//! storage concerns. Inbound adapters translate requests into calls on these
//! types and serialise the results.
//!
//! Public surface:
//! - [`SessionState`]: the logged-out / logged-in state machine.
//! - [`PageAccessPolicy`] and [`visible_navigation`]: role gating.
//! - [`pages`]: one pure view builder per page.
//! - [`Error`]: transport-agnostic failure payload.

pub mod access;
pub mod error;
pub mod header;
pub mod login;
pub mod page;
pub mod pages;
pub mod ports;
pub mod role;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::access::{
    HEADER_SHORTCUTS, NAVIGATION_MENU, NavEntry, PageAccessPolicy, filter_entries, is_permitted,
    permitted_roles, visible_navigation,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::header::{HeaderShortcut, HeaderView, format_long_date};
pub use self::login::{LoginForm, RoleOption, role_options};
pub use self::page::{Page, ParsePageError};
pub use self::role::{ParseRoleError, Role};
pub use self::session::{PageChange, SessionState};
pub use self::trace_id::TraceId;
pub use self::user::{ProfileDetails, User, UserId, UserValidationError};

