mod category_sidebar;
mod footer_bar;
mod header_bar;
mod start_banner;
mod word_list;

pub use category_sidebar::{
    CategorySidebar, CategorySidebarAction, CategorySidebarData, CategorySidebarState,
    CategorySidebarStyle, SidebarVisibility,
};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use start_banner::{StartBanner, StartBannerStyle};
pub use word_list::{
    LoadingState, WordList, WordListAction, WordListData, WordListState, WordListStyle,
};
