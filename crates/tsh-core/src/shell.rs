//! Shell execution port and rendering of its output into chunks.

use async_trait::async_trait;

use crate::{
    chunking::{LimitPolicy, MessageWriter, Segmented, BOLD, CODE},
    Result,
};

/// Captured result of one script run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellOutput {
    /// Combined stdout and stderr.
    pub output: String,
    /// Set when the script could not run or exited unsuccessfully.
    pub error: Option<String>,
}

/// Port for running scripts on the host.
#[async_trait]
pub trait ShellPort: Send + Sync {
    async fn execute(&self, script: &str) -> Result<ShellOutput>;
}

/// Render a run as "Output:" + output, then "Error:" + error if any.
///
/// Labels are bold, captured text is code.
pub fn render_output(out: &ShellOutput, limits: LimitPolicy) -> Segmented {
    let mut w = MessageWriter::new(limits);
    w.write("Output:", Some(BOLD));
    w.write_plain("\n");
    w.write(&out.output, Some(CODE));

    if let Some(err) = &out.error {
        w.write_plain("\n");
        w.write("Error:", Some(BOLD));
        w.write_plain("\n");
        w.write(err, Some(CODE));
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::Annotation;

    #[test]
    fn renders_output_only() {
        let out = ShellOutput {
            output: "hi\n".to_string(),
            error: None,
        };
        let r = render_output(&out, LimitPolicy::new(4096, 10).unwrap());
        assert_eq!(r.chunks.len(), 1);
        assert_eq!(r.chunks[0].text, "Output:\nhi\n");
        assert_eq!(
            r.chunks[0].annotations,
            vec![Annotation::new(BOLD, 0, 7), Annotation::new(CODE, 8, 3)]
        );
    }

    #[test]
    fn renders_error_section() {
        let out = ShellOutput {
            output: String::new(),
            error: Some("failed to execute command: exit status: 2".to_string()),
        };
        let r = render_output(&out, LimitPolicy::new(4096, 10).unwrap());
        let chunk = &r.chunks[0];
        assert_eq!(
            chunk.text,
            "Output:\n\nError:\nfailed to execute command: exit status: 2"
        );
        assert_eq!(
            chunk.annotations,
            vec![
                Annotation::new(BOLD, 0, 7),
                Annotation::new(BOLD, 9, 6),
                Annotation::new(CODE, 16, 41),
            ]
        );
    }

    #[test]
    fn long_output_is_capped() {
        let out = ShellOutput {
            output: "y\n".repeat(10_000),
            error: None,
        };
        let r = render_output(&out, LimitPolicy::new(4096, 3).unwrap());
        assert_eq!(r.chunks.len(), 3);
        assert!(r.truncated);
        assert!(r.chunks.iter().all(|c| c.len_utf16() <= 4096));
    }
}
