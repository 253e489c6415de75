/// A command line split into its verb and the arguments that follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandLine<'a> {
    pub verb: &'a str,
    pub args: Vec<&'a str>,
}

/// Splits `line` on whitespace. Returns `None` for a blank line.
///
/// There is no quoting, escaping or expansion: the simulator only ever deals with
/// plain names.
pub(crate) fn split_command(line: &str) -> Option<CommandLine<'_>> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    Some(CommandLine {
        verb,
        args: words.collect(),
    })
}
