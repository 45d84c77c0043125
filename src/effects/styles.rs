use crate::controller::PageContext;
use crate::error::PageError;

pub const STYLE_ELEMENT_ID: &str = "portfolio-runtime-styles";

pub const RUNTIME_CSS: &str = r#"
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-30px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(30px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes matrix {
        from { transform: translateY(0); }
        to { transform: translateY(200vh); }
    }
    .fade-in-up { animation: fadeInUp 0.8s ease forwards; }
    .slide-in-left { animation: slideInLeft 0.8s ease forwards; }
    .slide-in-right { animation: slideInRight 0.8s ease forwards; }

    .notification-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .notification-close {
        background: none;
        border: none;
        color: #000;
        font-size: 1.5rem;
        cursor: pointer;
        padding: 0;
        line-height: 1;
        font-weight: bold;
    }
    .notification-close:hover { opacity: 0.8; }

    @keyframes glow {
        0%, 100% { box-shadow: var(--glow-primary); }
        50% { box-shadow: var(--glow-secondary); }
    }
    .glow-animation { animation: glow 2s ease-in-out infinite; }

    @keyframes terminal-blink {
        0%, 50% { opacity: 1; }
        51%, 100% { opacity: 0; }
    }
    .terminal-cursor { animation: terminal-blink 1s infinite; }

    .code-keyword { color: var(--primary-color); }
    .code-string { color: var(--accent-color); }
    .code-number { color: var(--secondary-color); }
    .code-comment { color: var(--text-light); }
"#;

pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        log::debug!("No <head>, runtime styles skipped");
        return Ok(());
    };
    let style = document.create_element("style").map_err(PageError::js)?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(RUNTIME_CSS));
    head.append_child(&style).map_err(PageError::js)?;
    ctx.track_injected(style);
    Ok(())
}
