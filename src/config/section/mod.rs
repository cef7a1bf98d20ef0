//! Configuration section definitions.
//!
//! Each module corresponds to a section in `chromadoc.toml` and to one
//! consuming tool:
//!
//! | Module  | TOML Section | Consumer                          |
//! |---------|--------------|-----------------------------------|
//! | `site`  | `[site]`     | Static site renderer              |
//! | `lint`  | `[lint]`     | Lint runner                       |
//! | `style` | `[style]`    | CSS utility generator             |

mod lint;
pub mod site;
mod style;

pub use lint::{LintConfig, Severity};
pub use site::{NavItem, SidebarItem, SiteConfig, SiteInfoConfig, SocialLink};
pub use style::{EnvMode, StyleConfig};
