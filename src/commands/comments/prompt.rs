use std::io::{self, BufRead, Write};

/// Parameters of one export run, collected before the pipeline starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub sort_by: String,
    pub ascending: bool,
}

pub const DEFAULT_SORT_BY: &str = "Likes";

/// Fill in run options from command-line values, prompting on `input`
/// for whatever is missing when no URL was given.
///
/// With a URL on the command line nothing is asked: the sort field
/// defaults to Likes and the direction to descending.
pub fn collect_options(
    url: Option<&str>,
    sort_by: Option<&str>,
    ascending: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<RunOptions> {
    let Some(url) = url else {
        let url = ask(input, output, "Enter the YouTube video URL: ")?;
        let sort_by = match sort_by {
            Some(s) => s.to_string(),
            None => ask(
                input,
                output,
                "Enter the sorting criteria (Likes or Published At): ",
            )?,
        };
        let ascending = ascending
            || is_yes(&ask(input, output, "Sort ascending? (yes or no): ")?);
        return Ok(RunOptions {
            url,
            sort_by: non_empty_or_default(sort_by),
            ascending,
        });
    };

    Ok(RunOptions {
        url: url.to_string(),
        sort_by: non_empty_or_default(sort_by.unwrap_or_default().to_string()),
        ascending,
    })
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Only "yes" (any case) means ascending.
fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn non_empty_or_default(sort_by: String) -> String {
    if sort_by.trim().is_empty() {
        DEFAULT_SORT_BY.to_string()
    } else {
        sort_by
    }
}
