//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod auto_update;
pub mod floating;
pub mod focus;
pub mod layout;
pub mod preference;
pub mod theme_sink;

pub use auto_update::AutoUpdate;
pub use floating::FloatingAdapter;
pub use focus::FocusManager;
pub use layout::LayoutProbe;
pub use preference::{PreferenceStore, SystemPreference};
pub use theme_sink::ThemeSink;
