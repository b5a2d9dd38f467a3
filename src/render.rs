//! Truth table to text conversion.
//!
//! The layout is one header line with the variable names followed by
//! `Result`, then one line per row with `T`/`F` values, all separated by
//! [`RenderConfig::separator`]:
//!
//! ```text
//! a	b	Result
//! F	F	F
//! T	F	F
//! F	T	F
//! T	T	T
//! Connections: 1
//! ```
//!
//! # Examples
//!
//! ```
//! use lgc_rs::compile::compile;
//! use lgc_rs::render::Renderer;
//!
//! let c = compile("a * b").unwrap();
//! let text = Renderer::default().render(&c);
//! assert!(text.starts_with("a\tb\tResult\n"));
//! assert!(text.ends_with("Connections: 1\n"));
//! ```

use std::fmt;
use std::io;

use crate::compile::Compilation;
use crate::table::TruthTable;

/// Configuration options for text output.
///
/// ```
/// use lgc_rs::render::RenderConfig;
///
/// let config = RenderConfig {
///     separator: " | ",
///     true_only: true,
///     ..RenderConfig::default()
/// };
/// assert!(config.show_connectors);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Column separator (default: tab)
    pub separator: &'static str,
    /// Keep only rows evaluating to true (default: false)
    pub true_only: bool,
    /// Append a `Connections: n` line (default: true)
    pub show_connectors: bool,
    /// Append a `Negations: n` line (default: false)
    pub show_negations: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: "\t",
            true_only: false,
            show_connectors: true,
            show_negations: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the table and the enabled metric lines of a compilation.
    pub fn render(&self, compilation: &Compilation) -> String {
        let mut out = String::new();
        self.write_report(&mut out, compilation).unwrap();
        out
    }

    /// Renders the table alone, without metric lines.
    pub fn render_table(&self, table: &TruthTable) -> String {
        let mut out = String::new();
        self.write_table(&mut out, table).unwrap();
        out
    }

    /// Writes the same text as [`Renderer::render`] to `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W, compilation: &Compilation) -> io::Result<()> {
        writer.write_all(self.render(compilation).as_bytes())
    }

    fn write_report(&self, out: &mut impl fmt::Write, compilation: &Compilation) -> fmt::Result {
        self.write_table(out, &compilation.truth_table)?;
        if self.config.show_connectors {
            writeln!(out, "Connections: {}", compilation.connector_count)?;
        }
        if self.config.show_negations {
            writeln!(out, "Negations: {}", compilation.negation_count)?;
        }
        Ok(())
    }

    fn write_table(&self, out: &mut impl fmt::Write, table: &TruthTable) -> fmt::Result {
        let sep = self.config.separator;

        for name in table.variables() {
            write!(out, "{}{}", name, sep)?;
        }
        writeln!(out, "Result")?;

        for (row, result) in table.iter() {
            if self.config.true_only && !result {
                continue;
            }
            for name in table.variables() {
                write!(out, "{}{}", letter(row[name]), sep)?;
            }
            writeln!(out, "{}", letter(result))?;
        }
        Ok(())
    }
}

fn letter(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().write_table(f, self)
    }
}
