//! Data models for SSL Labs API responses
//!
//! These types mirror the JSON documents returned by the v3 API. Every field
//! defaults when absent so partial reports (assessments still in progress)
//! decode cleanly.

pub mod cert;
pub mod endpoint;
pub mod host;
pub mod http;
pub mod info;
pub mod policy;
pub mod protocol;
pub mod simulation;

pub use cert::{CaaPolicy, CaaRecord, Cert, CertificateChain, Trust, TrustPath};
pub use endpoint::{Endpoint, EndpointDetails, ENDPOINT_READY};
pub use host::{Host, HostStatus};
pub use http::{DrownHost, HttpHeader, HttpTransaction};
pub use info::{ApiError, ApiErrorResponse, Info, StatusCodes};
pub use policy::{HpkpDirective, HpkpPin, HpkpPolicy, HstsPolicy, HstsPreload, StaticPkpPolicy};
pub use protocol::{NamedGroup, NamedGroups, Protocol, ProtocolSuites, Suite};
pub use simulation::{SimClient, SimDetails, Simulation};
