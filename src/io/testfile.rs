//! Serialization of generated test cases
//!
//! The output format is line-oriented text: a provenance comment block, the
//! test count on its own line, then one block per test case. Each block is
//! three records (one per line, fields space-separated as
//! `l m n x y z alpha`) followed by a blank line.

use crate::basis::{BasisFunction, Nucleus, TestCase};
use crate::randomgen::DecimalValue;
use color_eyre::eyre::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes test cases to an open output stream.
pub struct TestFileWriter<W: Write> {
    inner: W,
}

impl TestFileWriter<BufWriter<File>> {
    /// Create or truncate the output file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(TestFileWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write> TestFileWriter<W> {
    pub fn new(inner: W) -> Self {
        TestFileWriter { inner }
    }

    /// Write the provenance comment block and the test count.
    pub fn write_header(&mut self, invocation: &str, ntests: usize) -> Result<()> {
        writeln!(self.inner, "# THIS FILE IS GENERATED VIA A SCRIPT. DO NOT EDIT")?;
        writeln!(self.inner, "#")?;
        writeln!(self.inner, "# Input parameters for integral generated with:")?;
        writeln!(self.inner, "#   {}", invocation)?;
        writeln!(self.inner, "#")?;
        writeln!(self.inner, "{}", ntests)?;
        Ok(())
    }

    /// Write one test case: the two orbital centers, the nucleus, and a
    /// separating blank line.
    pub fn write_case(&mut self, case: &TestCase) -> Result<()> {
        self.write_basis_function(&case.center1)?;
        self.write_basis_function(&case.center2)?;
        self.write_nucleus(&case.nucleus)?;
        writeln!(self.inner)?;
        Ok(())
    }

    fn write_basis_function(&mut self, bf: &BasisFunction) -> Result<()> {
        writeln!(
            self.inner,
            "{} {} {} {} {} {} {}",
            bf.l, bf.m, bf.n, bf.center[0], bf.center[1], bf.center[2], bf.alpha
        )?;
        Ok(())
    }

    fn write_nucleus(&mut self, nucleus: &Nucleus) -> Result<()> {
        let zero = DecimalValue::zero();
        writeln!(
            self.inner,
            "0 0 0 {} {} {} {}",
            nucleus.center[0], nucleus.center[1], nucleus.center[2], zero
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
