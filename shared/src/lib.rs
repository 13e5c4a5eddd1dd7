//! Tipos compartidos de Icon Jerseys.
//!
//! Modelos de dominio, tipos de sesión y borradores de formulario con su
//! validación. Este crate no depende de wasm: toda la lógica es testeable
//! de forma nativa con `cargo test`.

pub mod draft;
pub mod models;
pub mod session;
pub mod validators;

pub use draft::{Draft, ResourceForm, ShirtFields, TeamFields, ValidationError};
pub use models::{FutbolTeam, Shirt, ShirtPayload, TeamPayload, User};
pub use session::{AuthResponse, LoginRequest, RegisterRequest, Session};
pub use validators::{is_valid_email, validate_password};
