use clap::Parser;

use hybrid_fleet_optimizer::{app, config, i18n};

/// 차량 보유/렌트 전략의 수익성을 비교하고 12개월 배분을 Simplex로 최적화하는 CLI.
#[derive(Debug, Parser)]
#[command(name = "hybrid_fleet_optimizer", version)]
struct Cli {
    /// 인터페이스 언어 코드 (ko/en/pt-br, auto=자동 감지)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 언어팩 디렉터리 (기본: ./locales)
    #[arg(long)]
    locale_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang_code = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang_code, cli.locale_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
