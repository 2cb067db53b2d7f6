pub mod domain;
pub mod record;
pub mod scale;
pub mod types;

pub use domain::{DomainPadding, baseline_domain, padded_domain};
pub use record::{FieldDef, Record};
pub use scale::LinearScale;
pub use types::{Margins, PlotArea, Viewport};
