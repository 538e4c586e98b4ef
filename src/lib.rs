pub mod auth;
pub mod dates;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod sheets;
pub mod template;

pub use auth::{login, CredentialVerifier, StaticCredentials};
pub use dates::{format_date_long, format_log_timestamp};
pub use llm::{DraftServiceClient, DraftServiceConfig};
pub use models::{
    validate_fields, DraftResult, NormalizedLetter, OficioRequest, Session, ValidationError,
};
pub use normalize::{join_paragraphs, normalize_paragraphs};
pub use sheets::{AccessLog, DisabledLog, RemoteSheet, SheetConfig};
pub use template::{fill_template, output_filename, substitute};
