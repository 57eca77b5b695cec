pub mod blocks;
pub mod contact_form;
pub mod footer;
pub mod map_tabs;
pub mod mobile_menu;
pub mod page;
pub mod top_panel;

pub(crate) use {
    self::contact_form::contact_form, self::footer::footer, self::map_tabs::map_tabs,
    self::mobile_menu::mobile_menu, self::page::page, self::top_panel::top_panel,
};
