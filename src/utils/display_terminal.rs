//! 서버 시작 배너 출력
//!
//! `main`의 초기화 단계를 터미널에 보기 좋게 출력합니다. 로그와 달리
//! `RUST_LOG` 설정과 관계없이 항상 표준 출력으로 나갑니다.

/// 배너 내부 너비 (문자 수)
const BANNER_WIDTH: usize = 50;

/// 제목을 이중선 박스로 감싸 가운데 정렬하여 출력합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Fashion Shop Frontend               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BANNER_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BANNER_WIDTH
    )
}

/// `→ [1] Auth API client`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ [{}] {}", step, description);
}

/// `✓ [2] View templates verified (24)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ [{}] {} ({})", step, description, count);
}

/// 단계에 속한 설정 값 한 줄
///
/// ```text
///    ├─ API_BASE_URL: http://localhost:8000
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 리스닝 주소와 렌더링 가능한 뷰 수로 시작 요약을 출력합니다.
pub fn print_final_summary(bind_address: &str, views: usize) {
    println!();
    print_boxed_title("READY");
    println!("   listening  http://{}", bind_address);
    println!("   views      {}", views);
    println!("   health     http://{}/health", bind_address);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let banner = boxed_title("READY");
        let lines: Vec<&str> = banner.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('║') && lines[1].ends_with('║'));
        assert_eq!(lines[1].chars().count(), BANNER_WIDTH + 2);
        assert!(lines[1].contains("READY"));
    }
}
