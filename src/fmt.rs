//! Text rendering of selected properties.
//!
//! Line shapes, per emitted property:
//! - list mode prefixes each line with `<cpu>:`
//! - `key=` appears always in all-properties mode, and in keys mode only
//!   when more than one key was requested
//! - the value is wrapped as `prefix + value + suffix`, after optional
//!   whitespace stripping
//!
//! The default mode renders one bare index line per CPU.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::query::{Emit, Query};

/// Output shaping options, built once from the CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct Output {
    /// Replace each whitespace character in values with `_`.
    pub nowhite: bool,
    /// String prepended to every value.
    pub prefix: String,
    /// String appended to every value.
    pub suffix: String,
}

impl Output {
    /// Applies the nowhite transform: space, tab, CR and LF each become a
    /// single `_`.
    fn clean<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if !self.nowhite {
            return Cow::Borrowed(value);
        }
        Cow::Owned(
            value
                .chars()
                .map(|c| if matches!(c, ' ' | '\t' | '\r' | '\n') { '_' } else { c })
                .collect(),
        )
    }
}

/// Renders the selection as text lines.
pub fn render(
    emits: &[Emit<'_>],
    query: &Query,
    output: &Output,
    w: &mut impl Write,
) -> io::Result<()> {
    // In keys mode the label only disambiguates multiple requested keys;
    // in all-properties mode it is always present.
    let labeled = query.all || query.keys.len() > 1;
    for emit in emits {
        match emit {
            Emit::Index(index) => writeln!(w, "{index}")?,
            Emit::Prop { cpu, key, value } => {
                if query.list() {
                    write!(w, "{cpu}:")?;
                }
                if labeled {
                    write!(w, "{key}=")?;
                }
                writeln!(
                    w,
                    "{}{}{}",
                    output.prefix,
                    output.clean(value),
                    output.suffix
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cpu;
    use crate::query::select;

    fn rendered(cpus: &[Cpu], query: &Query, output: &Output) -> String {
        let emits = select(cpus, query);
        let mut buf = Vec::new();
        render(&emits, query, output, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn fixture() -> Vec<Cpu> {
        let mut cpu0 = Cpu::new(0);
        cpu0.set("cur_freq", 2400000);
        cpu0.set_str("model_name", "Fake CPU @ 2.40GHz");
        let mut cpu1 = Cpu::new(1);
        cpu1.set("cur_freq", 1200000);
        vec![cpu0, cpu1]
    }

    #[test]
    fn test_default_mode_lists_indices() {
        let out = rendered(&fixture(), &Query::new(vec![], false, None), &Output::default());
        assert_eq!(out, "0\n1\n");
    }

    #[test]
    fn test_single_key_list_mode() {
        let query = Query::new(vec!["cur_freq".into()], false, None);
        let out = rendered(&fixture(), &query, &Output::default());
        // One key requested: no key= label.
        assert_eq!(out, "0:2400000\n1:1200000\n");
    }

    #[test]
    fn test_two_keys_add_labels() {
        let query = Query::new(vec!["cur_freq".into(), "model_name".into()], false, None);
        let out = rendered(&fixture(), &query, &Output::default());
        assert_eq!(
            out,
            "0:cur_freq=2400000\n0:model_name=Fake CPU @ 2.40GHz\n1:cur_freq=1200000\n"
        );
    }

    #[test]
    fn test_all_mode_always_labels() {
        let query = Query::new(vec![], true, Some(1));
        let out = rendered(&fixture(), &query, &Output::default());
        // Single CPU selected: no index prefix, but key= stays.
        assert_eq!(out, "cur_freq=1200000\n");
    }

    #[test]
    fn test_prefix_suffix_wrap_value_only() {
        let query = Query::new(vec!["cur_freq".into()], false, Some(0));
        let output = Output {
            nowhite: false,
            prefix: "<".into(),
            suffix: ">".into(),
        };
        let out = rendered(&fixture(), &query, &output);
        assert_eq!(out, "<2400000>\n");
    }

    #[test]
    fn test_nowhite_replaces_whitespace() {
        let query = Query::new(vec!["model_name".into()], false, Some(0));
        let output = Output {
            nowhite: true,
            ..Output::default()
        };
        let out = rendered(&fixture(), &query, &output);
        assert_eq!(out, "Fake_CPU_@_2.40GHz\n");
    }

    #[test]
    fn test_nowhite_covers_tabs_and_newlines() {
        let output = Output {
            nowhite: true,
            ..Output::default()
        };
        assert_eq!(output.clean("a b\tc\rd\ne"), "a_b_c_d_e");
    }

    #[test]
    fn test_roundtrip_value_unchanged_without_nowhite() {
        let query = Query::new(vec!["model_name".into()], false, Some(0));
        let out = rendered(&fixture(), &query, &Output::default());
        assert_eq!(out, "Fake CPU @ 2.40GHz\n");
    }
}
