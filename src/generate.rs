use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::utils::charset::{Charset, Flags};
use crate::utils::{id, seed};

/// One completed run of the generator, kept around for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub input: String,
    pub length: usize,
    pub flags: Flags,
    pub charset: Charset,
    pub seed: u32,
    pub result: String,
}

impl Generation {
    pub fn new(input: &str, length: i64, flags: Flags) -> Result<Self> {
        if length <= 0 {
            return Err(Error::InvalidArgument("Length must be positive".to_owned()));
        }
        let len = usize::try_from(length)
            .map_err(|_| Error::InvalidArgument(format!("Length {} is too large", length)))?;

        let seed = seed::derive(input, length, &flags);
        let charset = Charset::from_flags(&flags);
        debug!("Seed {} with charset {:?}", seed, charset);

        let mut rng = id::seeded(seed);
        let result = id::new(&mut rng, &charset.alphabet(), len);
        trace!("Generated {} characters", len);

        Ok(Self {
            input: input.to_owned(),
            length: len,
            flags,
            charset,
            seed,
            result,
        })
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input)?;
        writeln!(f, "Length: {}", self.length)?;
        writeln!(
            f,
            "Params: no_symbols={}, digits_only={}, letters_only={}",
            self.flags.no_symbols, self.flags.digits_only, self.flags.letters_only
        )?;
        writeln!(f, "Seed: {}", self.seed)?;
        write!(f, "Result: {}", self.result)
    }
}

pub fn generate(input: &str, length: i64, flags: Flags) -> Result<String> {
    Generation::new(input, length, flags).map(|generation| generation.result)
}
