//! Child processes for the external tools: `javac`, `javadoc` and `gpg`.

use std::fmt;
use std::process::{Command, Output};

use crate::errors::JarshipError;

const MASK: &str = "********";

/// A command line for an external tool, built up argument by argument.
///
/// Arguments added with [`CommandBuilder::secret_arg`] are passed to the
/// child unchanged but masked wherever the command is displayed or logged.
#[derive(Clone)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    secret: Vec<usize>,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            secret: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append an argument that must never be printed, such as a passphrase.
    pub fn secret_arg(mut self, arg: impl Into<String>) -> Self {
        self.secret.push(self.args.len());
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments as passed to the child, secrets included.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Run the command to completion and capture its output.
    ///
    /// Only a failure to spawn is an error; the exit status is left to the
    /// caller. See [`CommandBuilder::exec_checked`].
    pub fn exec(&self) -> Result<Output, JarshipError> {
        tracing::debug!("exec: {self}");
        Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| JarshipError::Process {
                program: self.program.clone(),
                message: e.to_string(),
            })
    }

    /// Like [`CommandBuilder::exec`], but a non-zero exit is a
    /// [`JarshipError::Process`] carrying the child's trimmed stderr.
    pub fn exec_checked(&self) -> Result<Output, JarshipError> {
        let output = self.exec()?;
        if output.status.success() {
            return Ok(output);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(JarshipError::Process {
            program: self.program.clone(),
            message: format!("exited with {}: {}", output.status, stderr.trim()),
        })
    }
}

impl fmt::Display for CommandBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for (i, arg) in self.args.iter().enumerate() {
            let shown = if self.secret.contains(&i) { MASK } else { arg.as_str() };
            write!(f, " {shown}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CommandBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandBuilder")
            .field(&self.to_string())
            .finish()
    }
}
