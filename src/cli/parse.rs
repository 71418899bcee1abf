use clap::Parser;

use super::CliFlags;
use crate::entropy::EntropySource;
use crate::pass::CharacterClass;
use crate::settings::{FormMode, Settings};

pub fn parse(args: &[String]) -> Result<CliFlags, clap::Error> {
    CliFlags::try_parse_from(args)
}

/// Apply flags on top of the base settings.
pub fn apply(flags: &CliFlags, mut settings: Settings) -> Settings {
    if let Some(len) = flags.length {
        settings.length = len;
    }

    for (off, class) in [
        (flags.no_letters, CharacterClass::Letters),
        (flags.no_digits, CharacterClass::Digits),
        (flags.no_special, CharacterClass::Special),
    ] {
        if off {
            settings.classes.remove(class);
        }
    }

    if flags.fixed {
        settings.mode = FormMode::Fixed;
    }
    if flags.os_rng {
        settings.source = EntropySource::Os;
    }
    settings
}
