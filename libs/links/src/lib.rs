//! # labwire-links
//!
//! Decoding of topology link declarations into one canonical representation.
//!
//! ## Declaration Shapes
//!
//! A link is authored in one of two shapes:
//!
//! - **Legacy**: an untyped two-string endpoint list.
//!
//!   ```yaml
//!   endpoints: ["srl1:e1-5", "srl2:e1-5"]
//!   ```
//!
//! - **Typed**: a `type` discriminator plus the fields of that kind.
//!
//!   ```yaml
//!   type: mgmt-net
//!   host-interface: srl1_e1-5
//!   endpoint:
//!     node: srl1
//!     interface: e1-5
//!   ```
//!
//! Both decode to a [`CanonicalLink`]: a [`LinkKind`] tag plus exactly two
//! endpoint identifiers of the form `<owner>:<interface>`. Host-attachment
//! kinds (`host`, `macvlan`, `macvtap`, `mgmt-net`) use the kind name as the
//! owner of the host-side endpoint.
//!
//! ## Rejected Input
//!
//! Every malformed or ambiguous declaration is a hard [`LinkError`]. In
//! particular, a legacy endpoint list that names a `macvlan` or `macvtap`
//! owner is refused: those kinds must be declared with the typed schema.
//!
//! ## Entry Points
//!
//! - [`decode_value`] decodes one already-parsed declaration.
//! - `CanonicalLink` implements `Deserialize`, so any serde format decodes a
//!   link directly (`serde_yaml::from_str::<CanonicalLink>(..)`).
//! - [`decode_links`] and [`decode_links_collect`] handle ordered lists.

mod batch;
mod decode;
mod endpoint;
mod error;
mod kind;
mod legacy;
mod link;
mod params;
mod typed;

pub use batch::{
    decode_links, decode_links_collect, IndexedLink, IndexedLinkError, LinkReport, LinksDocument,
};
pub use decode::{decode_value, RawLinkDeclaration, DISCRIMINATOR_FIELD};
pub use endpoint::{EndpointId, ENDPOINT_SEPARATOR};
pub use error::LinkError;
pub use kind::LinkKind;
pub use link::CanonicalLink;
pub use params::LinkParams;
