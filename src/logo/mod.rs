mod builtin;
mod sampler;

pub use builtin::builtin_logo;
pub use sampler::{decode_logo, load_logo, sample_logo, LogoSample, SamplerSettings};

#[cfg(test)]
pub use sampler::{Candidate, PixelClass};
