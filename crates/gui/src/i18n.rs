use std::sync::atomic::{AtomicU8, Ordering};

use crate::state::Language;

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Language {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Language::Ru,
        _ => Language::En,
    }
}

pub fn set_lang(l: Language) {
    CURRENT_LANG.store(
        match l {
            Language::En => 0,
            Language::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Language::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.new" => if ru { "Новая доска" } else { "New board" },
        "menu.export" => if ru { "Экспорт доски..." } else { "Export board..." },
        "menu.export_title" => if ru { "Сохранить доску как JSON" } else { "Save board as JSON" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.zoom_in" => if ru { "Увеличить  Ctrl+=" } else { "Zoom in  Ctrl+=" },
        "menu.zoom_out" => if ru { "Уменьшить  Ctrl+-" } else { "Zoom out  Ctrl+-" },
        "menu.reset_zoom" => if ru { "Масштаб 100%" } else { "Reset zoom" },
        "menu.center" => if ru { "К центру доски" } else { "Center board" },
        "menu.grid" => if ru { "Сетка" } else { "Grid" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.server" => if ru { "Сервер чата" } else { "Chat server" },
        "settings.server_url" => if ru { "Адрес:" } else { "URL:" },
        "settings.server_env" => if ru { "Переопределяется BOARD_SERVER_URL" } else { "Overridden by BOARD_SERVER_URL" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.grid_opacity" => if ru { "Прозрачность:" } else { "Opacity:" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта:" } else { "Font size:" },
        "settings.apply" => if ru { "Сохранить" } else { "Save" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Board ───────────────────────────────────────────
        "board.hint_title" => if ru { "Бесконечная доска" } else { "Infinite Whiteboard" },
        "board.hint_body" => if ru {
            "Прокручивайте для навигации. Правый клик для меню. Ctrl/Cmd + колесо для масштаба."
        } else {
            "Scroll to explore. Right-click for options. Ctrl/Cmd + Scroll to zoom."
        },
        "ctx.add_chat" => if ru { "💬 Добавить чат" } else { "💬 Add Chat Panel" },
        "ctx.add_file" => if ru { "📄 Добавить файлы" } else { "📄 Add File Upload Panel" },
        "zoom.in_tip" => if ru { "Увеличить" } else { "Zoom in" },
        "zoom.out_tip" => if ru { "Уменьшить" } else { "Zoom out" },
        "zoom.reset_tip" => if ru { "Сбросить масштаб" } else { "Reset zoom" },

        // ── Panels ──────────────────────────────────────────
        "panel.chat" => if ru { "AI чат" } else { "AI Chat" },
        "panel.files" => if ru { "Загрузка файлов" } else { "File Upload" },
        "panel.insight" => if ru { "Инсайт" } else { "Insight" },
        "panel.close_tip" => if ru { "Закрыть панель" } else { "Close panel" },

        // ── Chat ────────────────────────────────────────────
        "chat.placeholder" => if ru { "Спросите что-нибудь о ваших данных." } else { "Ask anything about your data." },
        "chat.ask" => if ru { "Введите сообщение..." } else { "Type your message..." },
        "chat.send_tip" => if ru { "Отправить (Enter)" } else { "Send (Enter)" },
        "chat.attach_tip" => if ru { "Прикрепить файлы" } else { "Attach files" },
        "chat.thinking" => if ru { "AI думает..." } else { "AI is thinking..." },
        "chat.you" => if ru { "Вы" } else { "You" },
        "chat.retry" => if ru { "Повторить" } else { "Retry" },

        // ── Files ───────────────────────────────────────────
        "files.drop" => if ru { "Перетащите файлы сюда" } else { "Drag & drop files here" },
        "files.browse" => if ru { "Выбрать файлы" } else { "Browse files" },
        "files.accepted" => if ru {
            "Изображения, PDF, DOC, XLS, PPT, CSV, TXT (до 10 файлов)"
        } else {
            "Images, PDF, DOC, XLS, PPT, CSV, TXT (up to 10 files)"
        },
        "files.selected" => if ru { "Выбранные файлы:" } else { "Selected files:" },
        "files.remove_tip" => if ru { "Убрать файл" } else { "Remove file" },
        "files.chat_about" => if ru { "Обсудить файлы" } else { "Chat about files" },
        "files.insights" => if ru { "Получить инсайты" } else { "Get insights" },

        // ── Status bar ──────────────────────────────────────
        "status.panels" => if ru { "Панели" } else { "Panels" },
        "status.zoom" => if ru { "Масштаб" } else { "Zoom" },
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.ai_thinking" => if ru { "AI думает..." } else { "AI thinking..." },

        _ => "???",
    }
}
