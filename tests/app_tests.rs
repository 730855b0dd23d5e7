//! Integration tests for the window shell and the application loop.
//!
//! Covers:
//! - Close hides instead of exiting; only tray "Quit" exits
//! - Tray click toggling visibility
//! - Driving the app loop through its input stream while time passes

use std::time::Duration;

use tokio::io::{AsyncWriteExt, BufReader};

use pomodoro_tray::cli::TerminalWindow;
use pomodoro_tray::{
    App, CloseDecision, HostWindow, MenuAction, MockWindow, ShellOutcome, TimerMode, TimerState,
    TrayEvent, TrayIconManager, WindowShell, WindowVisibility,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates an app writing into memory with no tray and no sound.
fn create_app() -> App<Vec<u8>> {
    App::new(TerminalWindow::new(Vec::new(), false), None, None, None)
}

// ============================================================================
// Window Shell
// ============================================================================

/// 閉じる操作はウィンドウを隠すだけでプロセスは継続する
#[test]
fn close_hides_window() {
    let mut shell = WindowShell::new(MockWindow::new());

    assert_eq!(shell.on_close_requested(), CloseDecision::Hide);
    assert_eq!(shell.visibility(), WindowVisibility::Hidden);
    assert!(!shell.is_quitting());
}

/// トレイの「終了」の後は閉じる要求で終了する
#[test]
fn quit_from_tray_then_close_exits() {
    let mut shell = WindowShell::new(MockWindow::new());

    let outcome = shell.on_tray_event(TrayEvent::Menu(MenuAction::Quit));
    assert_eq!(outcome, ShellOutcome::Exit);
    assert_eq!(shell.on_close_requested(), CloseDecision::Exit);
}

/// トレイクリックで表示・非表示を切り替える
#[test]
fn tray_click_toggles_visibility() {
    let mut shell = WindowShell::new(MockWindow::new());

    shell.on_tray_event(TrayEvent::Click);
    shell.on_tray_event(TrayEvent::Click);
    shell.minimize_window();
    shell.on_tray_event(TrayEvent::Click);

    assert_eq!(
        shell.window().history(),
        &[
            WindowVisibility::Hidden,
            WindowVisibility::Visible,
            WindowVisibility::Minimized,
            WindowVisibility::Visible,
        ]
    );
}

/// 「アプリを表示」は最小化・非表示のどちらからでも復元する
#[test]
fn show_app_restores_window() {
    let mut shell = WindowShell::new(MockWindow::new());

    shell.close_window();
    assert_eq!(
        shell.on_menu_action(MenuAction::ShowApp),
        ShellOutcome::Continue
    );
    assert!(shell.window().is_visible());

    shell.minimize_window();
    shell.on_menu_action(MenuAction::ShowApp);
    assert!(shell.window().is_visible());
}

// ============================================================================
// Application Loop
// ============================================================================

/// 入力が q で終わると最終状態を返す
#[tokio::test(start_paused = true)]
async fn run_returns_final_state_on_quit() {
    let mut app = create_app();
    let input: &[u8] = b"l\nr\nq\n";

    let state = app.run(input).await.unwrap();
    assert_eq!(state.mode(), TimerMode::LongBreak);
    assert_eq!(state.remaining_seconds(), 900);
    assert!(!state.is_running());
}

/// 実行中に時間が経過するとカウントダウンが進む
#[tokio::test(start_paused = true)]
async fn run_counts_down_while_time_passes() {
    let mut app = create_app();
    let (mut writer, reader) = tokio::io::duplex(64);

    let driver = async move {
        writer.write_all(b"s\nt\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(10_500)).await;
        writer.write_all(b"t\n").await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        writer.write_all(b"q\n").await.unwrap();
    };

    let (state, ()) = tokio::join!(app.run(BufReader::new(reader)), driver);
    let state = state.unwrap();

    assert_eq!(state.mode(), TimerMode::ShortBreak);
    assert_eq!(state.remaining_seconds(), 290);
    assert!(!state.is_running());
}

/// 休憩を最後まで走らせると 00:00 で停止する
#[tokio::test(start_paused = true)]
async fn run_completes_short_break() {
    let mut app = create_app();
    let (mut writer, reader) = tokio::io::duplex(64);

    let driver = async move {
        writer.write_all(b"s\nt\n").await.unwrap();
        tokio::time::sleep(Duration::from_secs(400)).await;
        writer.write_all(b"q\n").await.unwrap();
    };

    let (state, ()) = tokio::join!(app.run(BufReader::new(reader)), driver);
    let state = state.unwrap();

    assert!(state.is_finished());
    assert!(!state.is_running());
}

/// 入力が閉じてもアプリは終了しない
#[tokio::test(start_paused = true)]
async fn run_survives_closed_input() {
    let mut app = create_app();
    let input: &[u8] = b"t\n";

    let result = tokio::time::timeout(Duration::from_secs(60), app.run(input)).await;
    assert!(result.is_err());
}

/// 読み取れない入力を受けてもアプリは終了しない
#[tokio::test(start_paused = true)]
async fn run_survives_unreadable_input() {
    let mut app = create_app();
    let input: &[u8] = b"t\n\xff\xfe\n";

    let result = tokio::time::timeout(Duration::from_secs(60), app.run(input)).await;
    assert!(result.is_err());
}

/// トレイの「終了」でループを抜け、トレイを片付ける
#[tokio::test(start_paused = true)]
async fn run_exits_on_tray_quit() {
    let tray = TrayIconManager::new(TimerState::default());
    let tray_tx = tray.event_sender();
    let mut app = App::new(TerminalWindow::new(Vec::new(), false), None, None, Some(tray));
    let (mut writer, reader) = tokio::io::duplex(64);

    let driver = async move {
        writer.write_all(b"t\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(3_050)).await;
        tray_tx.send(TrayEvent::Click).unwrap();
        tray_tx.send(TrayEvent::Menu(MenuAction::Quit)).unwrap();
        // Input stays open until the app has exited
        tokio::time::sleep(Duration::from_secs(3600)).await;
        drop(writer);
    };

    let state = tokio::select! {
        state = app.run(BufReader::new(reader)) => state.unwrap(),
        _ = driver => panic!("tray quit did not end the loop"),
    };

    assert_eq!(state.remaining_seconds(), 1497);
    assert!(app.shell().is_quitting());
    assert_eq!(app.shell().visibility(), WindowVisibility::Hidden);
    assert!(!app.engine().schedule().is_armed());
}

