mod lexicon_polarity;
mod pros_cons_policy;
mod rounding;
mod transformer_label;

pub use lexicon_polarity::LexiconPolarity;
pub use pros_cons_policy::{ProsConsPolicy, Stance};
pub use rounding::round_to;
pub use transformer_label::TransformerLabelPolicy;
