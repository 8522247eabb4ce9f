//! WhatsApp ads extraction pipeline: concurrent multi-account fetch from
//! the Graph API, call-to-action filtering, per-ad flattening, CSV export.

pub mod export;
pub mod fetch;
pub mod normalize;
pub mod phone;
