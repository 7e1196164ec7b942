//! Localized phrases and the type/delete script for the hero typewriter.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

const PHRASES_EN: [&str; 5] = [
    "from surviving... to creating",
    "from anxiety... to inner knowing",
    "from lost... to guided",
    "from broken... to whole",
    "from forgetting... to remembering",
];

const PHRASES_RU: [&str; 5] = [
    "от выживания... к созиданию",
    "от тревоги... к внутреннему знанию",
    "от потерянности... к ясности",
    "от разрушения... к целостности",
    "от забвения... к вспоминанию",
];

pub fn phrases(locale: Locale) -> &'static [&'static str; 5] {
    match locale {
        Locale::En => &PHRASES_EN,
        Locale::Ru => &PHRASES_RU,
    }
}

/// Animation timing, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterTiming {
    /// Per character while typing.
    pub speed: u32,
    /// Per character while deleting.
    pub delete_speed: u32,
    /// Hold after a phrase is fully typed.
    pub hold: u32,
    /// Between one deleted phrase and the next.
    pub gap: u32,
    /// Before the whole sequence starts over.
    pub loop_delay: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            speed: 55,
            delete_speed: 30,
            hold: 2200,
            gap: 400,
            loop_delay: 1500,
        }
    }
}

/// Constructor options for the TypeIt instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeItOptions {
    pub speed: u32,
    pub delete_speed: u32,
    pub break_lines: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub loop_delay: u32,
    pub wait_until_visible: bool,
}

impl From<&TypewriterTiming> for TypeItOptions {
    fn from(timing: &TypewriterTiming) -> Self {
        Self {
            speed: timing.speed,
            delete_speed: timing.delete_speed,
            break_lines: false,
            looping: true,
            loop_delay: timing.loop_delay,
            wait_until_visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Type(&'static str),
    Pause(u32),
    /// Number of characters to remove.
    Delete(u32),
}

/// Queue of TypeIt calls for one loop iteration.
pub fn script(locale: Locale, timing: &TypewriterTiming) -> Vec<Step> {
    let set = phrases(locale);
    let mut steps = Vec::with_capacity(set.len() * 4);
    for (i, phrase) in set.iter().enumerate() {
        steps.push(Step::Type(*phrase));
        steps.push(Step::Pause(timing.hold));
        steps.push(Step::Delete(char_len(*phrase)));
        if i + 1 < set.len() {
            steps.push(Step::Pause(timing.gap));
        }
    }
    steps
}

fn char_len(s: &str) -> u32 {
    u32::try_from(s.chars().count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_five_phrases_per_locale() {
        for locale in Locale::ALL {
            assert_eq!(phrases(locale).len(), 5);
        }
        assert_eq!(phrases(Locale::Ru)[4], "от забвения... к вспоминанию");
    }

    #[test]
    fn test_script_shape() {
        let timing = TypewriterTiming::default();
        let steps = script(Locale::En, &timing);
        // type, hold, delete for each phrase plus a gap between neighbours
        assert_eq!(steps.len(), 5 * 3 + 4);
        assert_eq!(
            &steps[..4],
            &[
                Step::Type("from surviving... to creating"),
                Step::Pause(2200),
                Step::Delete(29),
                Step::Pause(400),
            ]
        );
        assert_eq!(steps.last(), Some(&Step::Delete(33)));
    }

    #[test]
    fn test_delete_counts_characters_not_bytes() {
        let steps = script(Locale::Ru, &TypewriterTiming::default());
        let phrase = "от выживания... к созиданию";
        assert_eq!(steps[0], Step::Type(phrase));
        assert_eq!(steps[2], Step::Delete(phrase.chars().count() as u32));
        assert!(phrase.len() > phrase.chars().count());
    }

    #[test]
    fn test_options_json() {
        let options = TypeItOptions::from(&TypewriterTiming::default());
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "speed": 55,
                "deleteSpeed": 30,
                "breakLines": false,
                "loop": true,
                "loopDelay": 1500,
                "waitUntilVisible": true
            })
        );
    }
}
