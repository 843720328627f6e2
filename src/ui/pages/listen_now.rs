//! Backdrop behind the bar
//!
//! "Listen Now" shows three placeholder cards; the other tabs only show
//! their title.

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Font, Length, Padding};

use crate::app::Message;
use crate::ui::components::Tab;
use crate::ui::theme;

const LARGE_TITLE: f32 = 34.0;
const CARD_SPACING: f32 = 20.0;
const PAGE_PADDING: f32 = 16.0;
/// Cards keep a 16:10 shape
const CARD_ASPECT: f32 = 10.0 / 16.0;
/// Room left under the content for the bar
const BOTTOM_CLEARANCE: f32 = 100.0;

pub fn view(tab: Tab, width: f32, top_inset: f32, bottom_inset: f32) -> Element<'static, Message> {
    let heading = text(tab.title()).size(LARGE_TITLE).font(Font {
        weight: theme::SEMIBOLD,
        ..Default::default()
    });

    let body: Element<'static, Message> = match tab {
        Tab::ListenNow => {
            let card_width = (width - 2.0 * PAGE_PADDING).max(0.0);
            let card_height = card_width * CARD_ASPECT;
            let cards = (1..=3).map(|n| placeholder_card(n, card_height));
            column![heading]
                .extend(cards)
                .spacing(CARD_SPACING)
                .into()
        }
        Tab::Browse | Tab::Radio | Tab::Music | Tab::Search => column![heading]
            .push(Space::new().height(25.0))
            .into(),
    };

    let content = container(body)
        .width(Length::Fill)
        .padding(
            Padding::new(PAGE_PADDING)
                .top(top_inset + PAGE_PADDING)
                .bottom(bottom_inset + BOTTOM_CLEARANCE),
        );

    container(
        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(
                Scrollbar::new().width(0).scroller_width(0),
            )),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::main_content)
    .into()
}

fn placeholder_card(n: usize, height: f32) -> Element<'static, Message> {
    container(
        text(format!("Card {}", n))
            .size(17)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .width(Length::Fill)
    .height(height)
    .center_x(Length::Fill)
    .center_y(height)
    .style(theme::placeholder_card)
    .into()
}
