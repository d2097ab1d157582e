//! Optional external checkout widget.
//!
//! The hosted widget binds to the rendered anchors on its own (by `href` and
//! `data-product`). All the page does is ask it to initialise once, and nothing about
//! that call is allowed to fail the page: without the widget, purchase links still
//! navigate directly.

/// Outcome of an initialisation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetInit {
    Initialized,
    /// The widget script is not present on the page.
    Unavailable,
    /// The widget was present but its initialiser failed.
    Failed(String),
}

/// A checkout widget capability.
pub trait PurchaseWidget {
    /// Must not panic; every failure is reported through the return value.
    fn try_initialize(&self) -> WidgetInit;
}

/// Nullable handle to a widget that may not have loaded.
#[derive(Debug, Clone)]
pub struct OptionalWidget<W> {
    inner: Option<W>,
}

impl<W> OptionalWidget<W>
where
    W: PurchaseWidget,
{
    pub fn new(inner: Option<W>) -> Self {
        Self { inner }
    }

    /// Initialise the widget if there is one, logging (never surfacing) failures.
    pub fn try_initialize(&self) -> WidgetInit {
        let outcome = match &self.inner {
            Some(widget) => widget.try_initialize(),
            None => WidgetInit::Unavailable,
        };
        match &outcome {
            WidgetInit::Initialized => tracing::info!("payhip widget initialized"),
            WidgetInit::Unavailable => {
                tracing::info!("Payhip script not loaded, using direct links")
            }
            WidgetInit::Failed(message) => {
                tracing::info!(%message, "Payhip initialization not required or failed")
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted(WidgetInit);

    impl PurchaseWidget for Scripted {
        fn try_initialize(&self) -> WidgetInit {
            self.0.clone()
        }
    }

    #[test]
    fn absent_widget_reports_unavailable() {
        let widget: OptionalWidget<Scripted> = OptionalWidget::new(None);
        assert_eq!(widget.try_initialize(), WidgetInit::Unavailable);
    }

    #[test]
    fn present_widget_outcome_is_passed_through() {
        let ok = OptionalWidget::new(Some(Scripted(WidgetInit::Initialized)));
        assert_eq!(ok.try_initialize(), WidgetInit::Initialized);

        let failing = OptionalWidget::new(Some(Scripted(WidgetInit::Failed(
            "init is not a function".into(),
        ))));
        assert_eq!(
            failing.try_initialize(),
            WidgetInit::Failed("init is not a function".into())
        );
    }
}
