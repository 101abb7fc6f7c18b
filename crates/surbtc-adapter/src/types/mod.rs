/*
[INPUT]:  API parameter and enum definitions
[OUTPUT]: Typed request building blocks with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When wire parameter shapes change or new types added
*/

pub mod enums;
pub mod params;
pub mod requests;

pub use enums::*;
pub use params::*;
pub use requests::*;
