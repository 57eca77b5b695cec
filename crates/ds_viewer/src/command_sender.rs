use ds_site::controller::NavigationSource;
use ds_site::ViewId;

/// Requests raised while drawing a frame. They are applied once the frame is
/// drawn, when the site state is no longer borrowed by the panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UICommand {
    Navigate {
        target: ViewId,
        source: NavigationSource,
    },
    ToggleMobileMenu,
    SubmitContactForm,
}

pub struct CommandSender {
    ui_sender: std::sync::mpsc::Sender<UICommand>,
}

impl CommandSender {
    pub fn send_ui(&self, command: UICommand) {
        self.ui_sender.send(command).ok();
    }

    pub fn navigate(&self, target: ViewId, source: NavigationSource) {
        self.send_ui(UICommand::Navigate { target, source });
    }
}

pub struct CommandReceiver {
    ui_receiver: std::sync::mpsc::Receiver<UICommand>,
}

impl CommandReceiver {
    pub fn receive_ui(&self) -> Option<UICommand> {
        self.ui_receiver.try_recv().ok()
    }
}

pub fn command_channel() -> (CommandSender, CommandReceiver) {
    let (ui_sender, ui_receiver) = std::sync::mpsc::channel();
    (CommandSender { ui_sender }, CommandReceiver { ui_receiver })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_arrive_in_order() {
        let (sender, receiver) = command_channel();

        sender.navigate(ViewId::About, NavigationSource::Menu);
        sender.send_ui(UICommand::ToggleMobileMenu);

        assert_eq!(
            receiver.receive_ui(),
            Some(UICommand::Navigate {
                target: ViewId::About,
                source: NavigationSource::Menu
            })
        );
        assert_eq!(receiver.receive_ui(), Some(UICommand::ToggleMobileMenu));
        assert_eq!(receiver.receive_ui(), None);
    }
}
