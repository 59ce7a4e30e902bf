pub mod builders;
pub mod command;
mod error;
pub mod flags;
pub mod light;
pub mod registry;
pub mod tool;

pub use builders::{
    Blast2DemCommand, CommandBuilder, LasGroundCommand, LasViewCommand, OutputTarget,
};
pub use command::CommandLine;
pub use error::CommandError;
pub use flags::{is_decimal_input, FlagSet, Toggle};
pub use light::LightVector;
pub use registry::{OptionDef, OptionKind};
pub use tool::{Tool, Toolkit};
