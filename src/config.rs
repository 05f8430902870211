
use std::fmt;
use std::io::Write;
use crate::errors::*;
use crate::kernel::Kernel;
use crate::report::{self, Format};

#[inline] fn default_sigma() -> f64 { 15.0 }
#[inline] fn default_format() -> Format { Format::Text }

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    #[serde(default = "default_format")]
    pub format: Format,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sigma: default_sigma(),
            format: default_format(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    sigma: {}", self.sigma)?;
        writeln!(f, "    format: {}", self.format)?;
        Ok(())
    }
}

impl Config {
    /// Computes the kernel for this configuration and prints it to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Kernel> {
        let kernel = Kernel::new(self.sigma)
            .chain_err(|| format!("Failed to compute kernel for sigma {}", self.sigma))?;
        report::write_kernel(out, &kernel, self.format)?;
        Ok(kernel)
    }
}
