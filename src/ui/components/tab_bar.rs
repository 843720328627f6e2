//! Bottom tab strip
//!
//! Purely navigational chrome; only the backdrop page changes.

use std::sync::LazyLock;

use iced::widget::{column, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Length, Padding, mouse};

use crate::app::Message;
use crate::features::layout::TAB_BAR_HEIGHT;
use crate::ui::{icons, theme};

/// Top-level sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    ListenNow,
    Browse,
    Radio,
    Music,
    Search,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::ListenNow,
        Tab::Browse,
        Tab::Radio,
        Tab::Music,
        Tab::Search,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::ListenNow => "Listen Now",
            Tab::Browse => "Browse",
            Tab::Radio => "Radio",
            Tab::Music => "Music",
            Tab::Search => "Search",
        }
    }

    fn icon(self) -> svg::Handle {
        static HANDLES: LazyLock<[svg::Handle; 5]> = LazyLock::new(|| {
            [
                icons::LISTEN_NOW,
                icons::BROWSE,
                icons::RADIO,
                icons::LIBRARY,
                icons::SEARCH,
            ]
            .map(|icon| svg::Handle::from_memory(icon.as_bytes()))
        });

        // Declaration order matches ALL
        HANDLES[self as usize].clone()
    }
}

const ICON_SIZE: f32 = 24.0;
const LABEL_SIZE: f32 = 10.0;

/// Tab strip; `bottom_inset` keeps the labels above the home indicator
pub fn view(active: Tab, bottom_inset: f32) -> Element<'static, Message> {
    let items = Tab::ALL.into_iter().map(|tab| tab_item(tab, tab == active));

    container(
        row(items)
            .width(Length::Fill)
            .height(TAB_BAR_HEIGHT)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding::new(0.0).bottom(bottom_inset))
    .style(theme::bar_material)
    .into()
}

fn tab_item(tab: Tab, selected: bool) -> Element<'static, Message> {
    let tint = if selected {
        theme::ACCENT_RED
    } else {
        theme::GRAY
    };

    let content = column![
        svg(tab.icon())
            .width(ICON_SIZE)
            .height(ICON_SIZE)
            .style(theme::icon_tinted(tint)),
        text(tab.title()).size(LABEL_SIZE).color(tint),
    ]
    .spacing(2)
    .align_x(Alignment::Center);

    mouse_area(container(content).center_x(Length::Fill))
        .on_press(Message::SelectTab(tab))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_tabs_with_listen_now_first() {
        assert_eq!(Tab::ALL.len(), 5);
        assert_eq!(Tab::default(), Tab::ListenNow);
        let titles: Vec<_> = Tab::ALL.iter().map(|tab| tab.title()).collect();
        assert_eq!(
            titles,
            ["Listen Now", "Browse", "Radio", "Music", "Search"]
        );
    }
}
