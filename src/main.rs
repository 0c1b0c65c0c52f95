use anyhow::Result;
use entekhab_vahed::utils::logging;
use entekhab_vahed::{App, Config};

fn main() -> Result<()> {
    // راه‌اندازی لاگ
    logging::init();

    // بارگذاری پیکربندی
    let config = Config::load();

    // کدهای درس داده‌شده در خط فرمان انتخاب/لغو می‌شوند
    let toggle_ids: Vec<String> = std::env::args().skip(1).collect();

    App::new(config).run(&toggle_ids)
}
