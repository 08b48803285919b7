use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{TYPING_EFFECT_ENABLED, TYPING_START_DELAY_MS};

pub const HEADLINE_WORDS: [&str; 3] = ["Ad Clicks", "Traffic", "Visitors"];

const TYPE_MS: u32 = 100;
const DELETE_MS: u32 = 50;
const HOLD_MS: u32 = 1_500;
const NEXT_WORD_MS: u32 = 200;

/// Types a word out, holds it, deletes it, moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeWriter {
    words: &'static [&'static str],
    word: usize,
    chars: usize,
    deleting: bool,
    holding: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// New text to show, `None` while holding a finished word.
    pub text: Option<String>,
    pub next_in_ms: u32,
}

impl TypeWriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words, word: 0, chars: 0, deleting: false, holding: false }
    }

    pub fn step(&mut self) -> Tick {
        let Some(word) = self.words.get(self.word) else {
            return Tick { text: None, next_in_ms: HOLD_MS };
        };

        if self.holding {
            self.holding = false;
            self.deleting = true;
            return Tick { text: None, next_in_ms: HOLD_MS };
        }

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars += 1;
        }
        let text: String = word.chars().take(self.chars).collect();

        let len = word.chars().count();
        let next_in_ms = if !self.deleting && self.chars == len {
            self.holding = true;
            TYPE_MS
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            NEXT_WORD_MS
        } else if self.deleting {
            DELETE_MS
        } else {
            TYPE_MS
        };

        Tick { text: Some(text), next_in_ms }
    }
}

#[derive(Clone, PartialEq)]
struct Typed {
    text: String,
    next_in_ms: u32,
    tick: u32,
}

#[function_component(TypingHighlight)]
pub fn typing_highlight() -> Html {
    let writer = use_mut_ref(|| TypeWriter::new(&HEADLINE_WORDS));
    let typed = use_state(|| Typed {
        text: HEADLINE_WORDS[0].to_string(),
        next_in_ms: TYPING_START_DELAY_MS,
        tick: 0,
    });

    {
        let tick_dep = typed.tick;
        let typed = typed.clone();
        let writer = Rc::clone(&writer);
        use_effect_with_deps(
            move |tick| {
                let tick = *tick;
                let timeout = TYPING_EFFECT_ENABLED.then(|| {
                    let current = (*typed).clone();
                    Timeout::new(current.next_in_ms, move || {
                        let step = writer.borrow_mut().step();
                        typed.set(Typed {
                            text: step.text.unwrap_or(current.text),
                            next_in_ms: step.next_in_ms,
                            tick: tick + 1,
                        });
                    })
                });
                move || drop(timeout)
            },
            tick_dep,
        );
    }

    html! { <span class="highlight">{typed.text.clone()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(writer: &mut TypeWriter, steps: usize) -> Vec<Tick> {
        (0..steps).map(|_| writer.step()).collect()
    }

    #[test]
    fn types_holds_and_deletes_a_word() {
        static WORDS: [&str; 2] = ["Hi", "Yo"];
        let mut writer = TypeWriter::new(&WORDS);
        let ticks = run(&mut writer, 6);

        let texts: Vec<Option<&str>> = ticks.iter().map(|t| t.text.as_deref()).collect();
        assert_eq!(
            texts,
            vec![Some("H"), Some("Hi"), None, Some("H"), Some(""), Some("Y")]
        );
        let delays: Vec<u32> = ticks.iter().map(|t| t.next_in_ms).collect();
        assert_eq!(delays, vec![TYPE_MS, TYPE_MS, HOLD_MS, DELETE_MS, NEXT_WORD_MS, TYPE_MS]);
    }

    #[test]
    fn wraps_back_to_the_first_word() {
        static WORDS: [&str; 1] = ["A"];
        let mut writer = TypeWriter::new(&WORDS);
        // type "A", hold, delete to "", then "A" again
        let texts: Vec<Option<String>> = run(&mut writer, 4).into_iter().map(|t| t.text).collect();
        assert_eq!(
            texts,
            vec![Some("A".into()), None, Some(String::new()), Some("A".into())]
        );
    }

    #[test]
    fn no_words_just_idles() {
        static WORDS: [&str; 0] = [];
        let mut writer = TypeWriter::new(&WORDS);
        assert_eq!(writer.step(), Tick { text: None, next_in_ms: HOLD_MS });
    }
}
