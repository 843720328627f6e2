//! Absolutely positioned child
//!
//! Fills its parent and lays a single child out at an explicit frame,
//! clipped to the parent bounds. The sheet, the hero artwork and the
//! slide-in panels are all placed this way so their frames can be driven
//! directly by interpolated rectangles instead of by flow layout.
//!
//! # Design
//!
//! This is a primitive component - it uses generic Message types and
//! does not depend on application-specific types.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::{self, Cursor};
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Place `content` at `frame`, in the coordinates of the filled parent
pub fn positioned<'a, Message, Theme, Renderer>(
    frame: Rectangle,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Positioned<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Positioned {
        frame,
        content: content.into(),
    }
}

pub struct Positioned<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    frame: Rectangle,
    content: Element<'a, Message, Theme, Renderer>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Positioned<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);

        // Child gets exactly the frame size, negative sizes collapse to zero
        let frame_size = Size::new(self.frame.width.max(0.0), self.frame.height.max(0.0));
        let child_limits = layout::Limits::new(frame_size, frame_size);

        let child = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &child_limits)
            .move_to(Point::new(self.frame.x, self.frame.y));

        layout::Node::with_children(size, vec![child])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(child_layout) = layout.children().next() else {
            return;
        };
        if child_layout.bounds().intersection(&bounds).is_none() {
            return;
        }

        renderer.with_layer(bounds, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .next()
            .map(|child_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    child_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }
}

impl<'a, Message, Theme, Renderer> From<Positioned<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(widget: Positioned<'a, Message, Theme, Renderer>) -> Self {
        Element::new(widget)
    }
}
