use std::fmt::{self, Debug};

use log::Level::Trace;
use log::{log_enabled, trace};

use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::{util, LABEL, LOG_TARGET};

const LABEL_WIDTH: usize = 15;
const INPUT_WIDTH: usize = 35;

/// One trace line per parser event:
///
/// ```text
/// <remaining input>  <label>  : op(args) -> result
/// ```
pub(crate) trait Loggable {
    fn log_event<Args: Debug>(&self, msg: &str, args: Args, result: fmt::Arguments);

    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args) {
        self.log_event(msg, args, format_args!(""));
    }

    fn log_success<Args: Debug>(&self, msg: &str, args: Args) {
        self.log_event(msg, args, format_args!(" -> ok"));
    }

    fn log_failure<Args: Debug>(&self, msg: &str, args: Args) {
        self.log_event(msg, args, format_args!(" -> no match"));
    }

    /// Logs against the cursor the parser started from, showing the value on success.
    fn log_outcome<Args: Debug, R: Debug>(&self, msg: &str, args: Args, outcome: &Outcome<'_, R>) {
        match outcome {
            Outcome::Success { value, .. } => self.log_event(msg, args, format_args!(" -> {value:?}")),
            Outcome::Failure => self.log_failure(msg, args),
        }
    }
}

impl<'a> Loggable for Cursor<'a> {
    fn log_event<Args: Debug>(&self, msg: &str, args: Args, result: fmt::Arguments) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$}{result}",
                iw = INPUT_WIDTH,
                lw = LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self.remaining()),
                operation = format!("{msg}({args:?})"),
            );
        }
    }
}
