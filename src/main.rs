//! autohangul - 영문 상태로 잘못 친 한글 단어를 자동으로 고쳐 주는 macOS 프로그램

use autohangul::config::{config_path, default_log_filter, read_config, AppConfig};

fn main() {
    let path = config_path();
    let loaded = read_config(&path);

    // 로깅 초기화 (기본: error/warn만 출력, RUST_LOG 우선)
    let filter = loaded
        .as_ref()
        .map(|config| config.log_filter.clone())
        .unwrap_or_else(|_| default_log_filter());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{} 무시, 기본 설정 사용: {}", path.display(), e);
        AppConfig::default()
    });

    if let Err(e) = run(config) {
        log::error!("{}", e);
        eprintln!("autohangul 실행 실패: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_os = "macos")]
fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    use autohangul::engine::{CorrectionController, SnippetStore};
    use autohangul::platform::{
        request_accessibility_permission, run_event_tap, CgEventSink, TisInputSource,
    };
    use autohangul::{BoundedClassifier, HeuristicClassifier};
    use std::sync::{Mutex, PoisonError};

    if !request_accessibility_permission(true) {
        eprintln!();
        eprintln!("⚠️  Accessibility 권한이 필요합니다.");
        eprintln!("   시스템 설정 > 개인 정보 보호 및 보안 > 손쉬운 사용");
        eprintln!("   에서 이 앱을 허용해주세요.");
        eprintln!();
    }

    let pid = i64::from(std::process::id());

    let classifier = BoundedClassifier::spawn(
        HeuristicClassifier::new(config.heuristic_config()),
        config.classifier_timeout(),
    )?;

    let mut controller =
        CorrectionController::new(classifier, TisInputSource, CgEventSink::new(pid), pid)
            .with_policy(config.policy())
            .with_max_word_length(config.max_word_length);

    if config.snippets_enabled {
        let snippets_file = config.snippets_file();
        let loaded = SnippetStore::ensure_file(&snippets_file)
            .and_then(|()| SnippetStore::load(&snippets_file));
        match loaded {
            Ok(snippets) => controller.set_snippets(Some(snippets)),
            Err(e) => log::warn!("스니펫 비활성화: {}", e),
        }
    }
    controller.set_enabled(config.enabled);

    // 탭 콜백은 한 스레드에서 순서대로 호출되며, 이벤트 하나를 끝까지 처리한다
    let controller = Mutex::new(controller);
    run_event_tap(move |event| {
        let mut controller = controller.lock().unwrap_or_else(PoisonError::into_inner);
        let outcome = controller.handle(&event);
        log::trace!("{:?} -> {:?}", event.keycode, outcome);
    })?;

    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn run(_config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    Err("macOS에서만 실행할 수 있습니다".into())
}
