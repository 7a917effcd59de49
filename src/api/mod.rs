//! Service facade implementations.

mod ai;
mod enroll;
mod external_oauth;
mod google_calendar;
mod layouts;
mod login;
mod lookup;
mod messaging;
mod notes;
mod objects;
mod phone_numbers;
mod portals;
mod record_types;
mod sip_endpoints;
mod storage;
mod subscriptions;
mod verification;
mod video;
mod voice;
mod workflows;

pub use ai::{AiApi, GenerativeApi, TtsApi};
pub use enroll::EnrollApi;
pub use external_oauth::ExternalOAuthApi;
pub use google_calendar::GoogleCalendarApi;
pub use layouts::LayoutsApi;
pub use login::LoginApi;
pub use lookup::LookupApi;
pub use messaging::MessagingApi;
pub use notes::NotesApi;
pub use objects::ObjectsApi;
pub use phone_numbers::PhoneNumbersApi;
pub use portals::PortalsApi;
pub use record_types::RecordTypesApi;
pub use sip_endpoints::SipEndpointsApi;
pub use storage::StorageApi;
pub use subscriptions::SubscriptionsApi;
pub use verification::VerificationApi;
pub use video::VideoApi;
pub use voice::VoiceApi;
pub use workflows::WorkflowsApi;
