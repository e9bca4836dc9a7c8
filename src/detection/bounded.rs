//! 시간 제한이 있는 분류기 래퍼
//!
//! 분류기를 전용 워커 스레드로 옮기고, 각 질의를 `timeout` 안에 끝내지 못하면
//! "분류 불가"로 처리한다. 키 이벤트 콜백이 분류기 때문에 멈추지 않게 한다.
//! 처리 중인 질의는 최대 하나이며, 앞 질의가 끝나기 전의 새 질의는 보내지 않는다.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::classifier::LanguageClassifier;

/// 기본 질의 제한 시간
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(250);

struct Query {
    word: String,
    reply: Sender<Option<f32>>,
}

pub struct BoundedClassifier {
    queries: Sender<Query>,
    in_flight: Arc<AtomicBool>,
    timeout: Duration,
}

impl BoundedClassifier {
    /// 워커 스레드를 띄우고 분류기의 소유권을 넘긴다
    pub fn spawn<C>(classifier: C, timeout: Duration) -> io::Result<Self>
    where
        C: LanguageClassifier + Send + 'static,
    {
        let (queries, inbox) = mpsc::channel::<Query>();
        let in_flight = Arc::new(AtomicBool::new(false));
        let worker_in_flight = Arc::clone(&in_flight);

        thread::Builder::new()
            .name("classifier".into())
            .spawn(move || {
                for query in inbox {
                    let verdict = classifier.predict(&query.word);
                    worker_in_flight.store(false, Ordering::Release);
                    // 이미 시간 초과로 포기한 질의면 받는 쪽이 없다
                    let _ = query.reply.send(verdict);
                }
                log::debug!("분류기 워커 종료");
            })?;

        Ok(Self {
            queries,
            in_flight,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl LanguageClassifier for BoundedClassifier {
    fn predict(&self, word: &str) -> Option<f32> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            log::warn!("이전 분류 질의가 아직 처리 중: {}", word);
            return None;
        }

        let (reply, answer) = mpsc::channel();
        let query = Query {
            word: word.to_string(),
            reply,
        };

        if self.queries.send(query).is_err() {
            log::error!("분류기 워커가 종료됨");
            return None;
        }

        match answer.recv_timeout(self.timeout) {
            Ok(verdict) => verdict,
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("분류기 응답 시간 초과 ({:?}): {}", self.timeout, word);
                None
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::error!("분류기 워커가 응답 없이 종료됨");
                None
            }
        }
    }
}
