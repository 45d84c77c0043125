use rand::Rng;
use web_sys::Element;

use crate::config::MatrixConfig;
use crate::controller::PageContext;
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixColumn {
    pub left_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    /// Rows of digits, top to bottom.
    pub rows: Vec<String>,
}

impl MatrixColumn {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; left: {}%; top: -100vh; color: var(--primary-color); \
             font-family: 'Courier New', monospace; font-size: 14px; line-height: 1.2; \
             opacity: 0.1; animation: matrix {}s linear infinite; animation-delay: {}s;",
            self.left_percent, self.duration_s, self.delay_s
        )
    }

    /// Digits only, so joining with `<br>` is safe to hand to `innerHTML`.
    pub fn markup(&self) -> String {
        self.rows.join("<br>")
    }
}

pub fn generate_columns<R: Rng>(rng: &mut R, config: &MatrixConfig) -> Vec<MatrixColumn> {
    let spacing = if config.columns == 0 { 0.0 } else { 100.0 / config.columns as f64 };
    (0..config.columns)
        .map(|i| {
            let duration_s = config.min_duration_s + rng.gen::<f64>() * config.duration_spread_s;
            let delay_s = rng.gen::<f64>() * config.max_delay_s;
            let digits: String = (0..config.digits_per_column)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect();
            let rows = digits
                .as_bytes()
                .chunks(config.digits_per_row)
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect();
            MatrixColumn {
                left_percent: i as f64 * spacing,
                duration_s,
                delay_s,
                rows,
            }
        })
        .collect()
}

pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    let Some(body) = document.body() else {
        return Ok(());
    };
    let columns = {
        let shared = ctx.rng();
        let mut rng = shared.borrow_mut();
        generate_columns(&mut *rng, &ctx.config().matrix)
    };

    let backdrop: Element = document.create_element("div").map_err(PageError::js)?;
    backdrop.set_class_name("matrix-bg");
    for column in &columns {
        let el = document.create_element("div").map_err(PageError::js)?;
        el.set_attribute("style", &column.style()).map_err(PageError::js)?;
        el.set_inner_html(&column.markup());
        backdrop.append_child(&el).map_err(PageError::js)?;
    }
    body.append_child(&backdrop).map_err(PageError::js)?;
    ctx.track_injected(backdrop);
    log::debug!("Matrix backdrop with {} columns", columns.len());
    Ok(())
}
