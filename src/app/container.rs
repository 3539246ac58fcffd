use std::sync::Arc;

use chrono::Local;

use crate::adapters::{RsyncAdapter, StdFsAdapter, TerminalPromptAdapter};
use crate::app::{
    clean_interactor::CleanInteractor, convert_interactor::ConvertInteractor,
    import_interactor::ImportInteractor, list_interactor::ListInteractor,
};
use crate::ports::{AssumeYes, ConfirmPort, CopyPort, FsPort};

pub trait AppContainer: Send + Sync {
    fn convert_interactor(&self) -> Arc<ConvertInteractor<Local>>;
    fn list_interactor(&self) -> Arc<ListInteractor>;
    fn clean_interactor(&self) -> Arc<CleanInteractor>;
    fn import_interactor(&self) -> Arc<ImportInteractor>;
}

pub struct DefaultAppContainer {
    convert_interactor: Arc<ConvertInteractor<Local>>,
    list_interactor: Arc<ListInteractor>,
    clean_interactor: Arc<CleanInteractor>,
    import_interactor: Arc<ImportInteractor>,
}

impl DefaultAppContainer {
    /// Wire the production adapters. With `assume_yes` every confirmation
    /// is answered without prompting.
    pub fn new(assume_yes: bool) -> Self {
        let fs_port: Arc<dyn FsPort> = Arc::new(StdFsAdapter::new());
        let copy_port: Arc<dyn CopyPort> = Arc::new(RsyncAdapter::new());
        let confirm_port: Arc<dyn ConfirmPort> = if assume_yes {
            Arc::new(AssumeYes)
        } else {
            Arc::new(TerminalPromptAdapter::new())
        };
        Self::with_ports(fs_port, copy_port, confirm_port)
    }

    pub fn with_ports(
        fs_port: Arc<dyn FsPort>,
        copy_port: Arc<dyn CopyPort>,
        confirm_port: Arc<dyn ConfirmPort>,
    ) -> Self {
        let convert_interactor = Arc::new(ConvertInteractor::local());
        let list_interactor = Arc::new(ListInteractor::new(Arc::clone(&fs_port)));
        let clean_interactor = Arc::new(CleanInteractor::new(
            Arc::clone(&fs_port),
            Arc::clone(&confirm_port),
        ));
        let import_interactor = Arc::new(ImportInteractor::new(
            Arc::clone(&fs_port),
            copy_port,
            confirm_port,
        ));

        Self {
            convert_interactor,
            list_interactor,
            clean_interactor,
            import_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn convert_interactor(&self) -> Arc<ConvertInteractor<Local>> {
        Arc::clone(&self.convert_interactor)
    }

    fn list_interactor(&self) -> Arc<ListInteractor> {
        Arc::clone(&self.list_interactor)
    }

    fn clean_interactor(&self) -> Arc<CleanInteractor> {
        Arc::clone(&self.clean_interactor)
    }

    fn import_interactor(&self) -> Arc<ImportInteractor> {
        Arc::clone(&self.import_interactor)
    }
}
