//! 키 입력 -> 판정 -> 교정 파이프라인
//!
//! 이벤트 하나를 끝까지 처리한 뒤 다음 이벤트를 받는다. 버퍼와 조합기는
//! 컨트롤러가 단독으로 소유하고, 외부 협력자(분류기, 입력 소스, 이벤트 주입)는
//! 트레이트로만 본다.

use crate::core::composer::HangulComposer;
use crate::core::converter::revert;
use crate::core::keymap::to_jamo;
use crate::detection::{
    AbstainReason, ActiveInputSource, Classification, Decision, DecisionPolicy,
    LanguageClassifier,
};

use super::buffer::{KeyStreamBuffer, DEFAULT_CAPACITY};
use super::event::{Boundary, KeyEvent};
use super::replay::{KeySink, ReplayEngine};
use super::snippets::SnippetStore;

/// 현재 입력 소스 질의
pub trait InputSourceReader {
    /// 한글 입력기가 켜져 있으면 true
    fn is_alternate_script_active(&self) -> bool;
}

impl<F> InputSourceReader for F
where
    F: Fn() -> bool,
{
    fn is_alternate_script_active(&self) -> bool {
        self()
    }
}

/// 이벤트 하나를 처리한 결과
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 자기 이벤트이거나 비활성 상태
    Ignored,
    /// 문자를 버퍼에 추가
    Buffered,
    /// Delete/취소 키로 버퍼를 버림
    Reset,
    Abstained(AbstainReason),
    /// 입력한 그대로 둠
    Kept {
        source: ActiveInputSource,
        classification: Classification,
    },
    /// 변환해도 같은 글자라 재생하지 않음
    Unchanged,
    Converted {
        deleted: usize,
        typed: String,
    },
    Expanded {
        shortcut: String,
        deleted: usize,
        typed: String,
    },
    /// 합성 이벤트 주입 실패 (재시도 없음)
    ReplayFailed(String),
}

pub struct CorrectionController<C, P, S> {
    classifier: C,
    input_source: P,
    replay: ReplayEngine<S>,
    policy: DecisionPolicy,
    snippets: Option<SnippetStore>,
    buffer: KeyStreamBuffer,
    composer: HangulComposer,
    own_pid: i64,
    enabled: bool,
}

impl<C, P, S> CorrectionController<C, P, S>
where
    C: LanguageClassifier,
    P: InputSourceReader,
    S: KeySink,
{
    pub fn new(classifier: C, input_source: P, sink: S, own_pid: i64) -> Self {
        Self {
            classifier,
            input_source,
            replay: ReplayEngine::new(sink),
            policy: DecisionPolicy::default(),
            snippets: None,
            buffer: KeyStreamBuffer::new(DEFAULT_CAPACITY),
            composer: HangulComposer::new(),
            own_pid,
            enabled: true,
        }
    }

    pub fn with_policy(mut self, policy: DecisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_snippets(mut self, snippets: SnippetStore) -> Self {
        self.snippets = Some(snippets);
        self
    }

    pub fn with_max_word_length(mut self, max_chars: usize) -> Self {
        self.buffer = KeyStreamBuffer::new(max_chars);
        self.composer.reset();
        self
    }

    pub fn set_snippets(&mut self, snippets: Option<SnippetStore>) {
        self.snippets = snippets;
    }

    /// 끄면 버퍼를 비우고, 다시 켤 때까지 모든 이벤트를 무시
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::info!("자동 교정 {}", if enabled { "켜짐" } else { "꺼짐" });
        }
        self.enabled = enabled;
        self.reset();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.composer.reset();
    }

    /// 지금까지 입력을 한글로 조합한 미리보기
    pub fn preview(&self) -> String {
        self.composer.flush()
    }

    pub fn buffer(&self) -> &KeyStreamBuffer {
        &self.buffer
    }

    pub fn replay(&self) -> &ReplayEngine<S> {
        &self.replay
    }

    pub fn handle(&mut self, event: &KeyEvent) -> Outcome {
        if event.pid == self.own_pid || !self.enabled {
            return Outcome::Ignored;
        }

        match event.boundary {
            None if !event.text.is_empty() => {
                self.append(&event.text);
                Outcome::Buffered
            }
            // 문자를 만들지 않는 키는 취소와 같다
            None | Some(Boundary::Delete) | Some(Boundary::Cancel) => {
                log::debug!("버퍼 초기화 (keycode {})", event.keycode);
                self.reset();
                Outcome::Reset
            }
            Some(Boundary::Space) => {
                let outcome = self.on_space();
                self.reset();
                outcome
            }
        }
    }

    fn append(&mut self, text: &str) {
        if self.buffer.push(text) {
            for c in text.chars() {
                self.composer.feed(to_jamo(c));
            }
            log::debug!("버퍼: {}", self.buffer.as_str());
        } else {
            log::debug!("버퍼 용량 초과 ({}자)", self.buffer.capacity());
        }
    }

    fn on_space(&mut self) -> Outcome {
        if self.buffer.is_overflowed() {
            return Outcome::Abstained(AbstainReason::Overflow);
        }
        if self.buffer.is_empty() {
            return Outcome::Abstained(AbstainReason::Unclassifiable);
        }

        let source = ActiveInputSource::from_alternate(self.input_source.is_alternate_script_active());

        // 한글 입력 중에는 화면 글자 수가 키 입력 수와 다르므로 확장하지 않음
        if source == ActiveInputSource::Other {
            if let Some(outcome) = self.expand_snippet() {
                return outcome;
            }
        }

        let word = self.buffer.as_str().to_string();
        let verdict = self.classifier.predict(&revert(&word));

        match self.policy.decide(&word, source, verdict) {
            Decision::Convert => self.convert(&word),
            Decision::Keep {
                source,
                classification,
            } => {
                log::debug!("유지: {} ({:?}, {:?})", word, source, classification);
                Outcome::Kept {
                    source,
                    classification,
                }
            }
            Decision::Abstain(reason) => {
                log::debug!("판단 보류: {} ({})", word, reason);
                Outcome::Abstained(reason)
            }
        }
    }

    fn convert(&mut self, word: &str) -> Outcome {
        let converted = self.composer.flush();
        if converted == word {
            return Outcome::Unchanged;
        }

        // 경계 Space까지 지움
        let deleted = self.buffer.char_count() + 1;
        let typed = format!("{} ", converted);

        log::info!("변환: '{}' -> '{}'", word, converted);
        self.run_replay(deleted, typed, |deleted, typed| Outcome::Converted {
            deleted,
            typed,
        })
    }

    fn expand_snippet(&mut self) -> Option<Outcome> {
        let word = self.buffer.as_str();
        let found = self.snippets.as_ref()?.find_in(word)?;

        let tail: String = word
            .chars()
            .skip(found.start + found.shortcut_len)
            .collect();
        let deleted = self.buffer.char_count() - found.start + 1;
        let typed = format!("{}{} ", found.expansion, tail);
        let shortcut = found.shortcut.to_string();

        log::info!("스니펫 확장: '{}' -> '{}'", shortcut, found.expansion);
        Some(self.run_replay(deleted, typed, |deleted, typed| Outcome::Expanded {
            shortcut,
            deleted,
            typed,
        }))
    }

    fn run_replay<F>(&mut self, deleted: usize, typed: String, done: F) -> Outcome
    where
        F: FnOnce(usize, String) -> Outcome,
    {
        match self.replay.replace(deleted, &typed) {
            Ok(()) => done(deleted, typed),
            Err(e) => {
                log::error!("교정 입력 실패: {}", e);
                Outcome::ReplayFailed(e.to_string())
            }
        }
    }
}
