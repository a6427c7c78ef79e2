use chrono::NaiveDateTime;
use tracing::{debug, info, warn};
use tutorbook_core::{NextLesson, NextLessonCommand};

use super::Parser;
use crate::error::{ParseError, Result};
use crate::lesson::parse_lesson_window;
use crate::syntax::PREFIX_NEXT_LESSON;
use crate::tokenizer::tokenize;
use crate::util::parse_index;

/// Parses `nextlesson` arguments: `INDEX nl/[D/M/YYYY HHMM-HHMM]`.
///
/// `nl/` is required. An empty value removes the contact's lesson.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextLessonCommandParser;

impl Parser for NextLessonCommandParser {
    type Output = NextLessonCommand;

    fn parse(&self, args: &str, now: NaiveDateTime) -> Result<NextLessonCommand> {
        debug!(args, "Parsing nextlesson command");
        let map = tokenize(args, &[PREFIX_NEXT_LESSON]);

        let index = parse_index(map.preamble()).map_err(|err| {
            warn!(error = %err, "Failed to parse index");
            ParseError::invalid_format_caused_by(NextLessonCommand::MESSAGE_USAGE, err)
        })?;

        let Some(raw) = map.value(PREFIX_NEXT_LESSON) else {
            return Err(ParseError::invalid_format(NextLessonCommand::MESSAGE_USAGE));
        };
        map.verify_no_duplicate_prefixes_for(&[PREFIX_NEXT_LESSON])?;

        let next_lesson = if raw.is_empty() {
            NextLesson::None
        } else {
            NextLesson::Scheduled(parse_lesson_window(raw, now)?)
        };

        info!(index = %index, lesson = %next_lesson, "Parsed nextlesson command");
        Ok(NextLessonCommand::new(index, next_lesson))
    }
}
