//! Test-input generation run
//!
//! Seeds an explicit RNG from the configured seed and streams sampled test
//! cases to the writer. For a fixed parameter set the produced file is
//! byte-identical across runs.

use crate::basis::TestCase;
use crate::config::GeneratorParams;
use crate::io::TestFileWriter;
use color_eyre::eyre::{Result, WrapErr};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tracing::info;

/// Generate the test file named by the parameters.
pub fn generate(params: &GeneratorParams, invocation: &str) -> Result<()> {
    let mut writer = TestFileWriter::create(&params.filename)
        .wrap_err_with(|| format!("Unable to create output file: {}", params.filename))?;
    generate_into(&mut writer, params, invocation)?;
    writer.flush()?;
    Ok(())
}

/// Stream the header and all test cases into an open writer.
pub fn generate_into<W: Write>(
    writer: &mut TestFileWriter<W>,
    params: &GeneratorParams,
    invocation: &str,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(params.seed);

    writer.write_header(invocation, params.ntests)?;
    for _ in 0..params.ntests {
        let case = TestCase::sample(&mut rng, params);
        writer.write_case(&case)?;
    }

    info!("Generated {} test cases", params.ntests);
    Ok(())
}
