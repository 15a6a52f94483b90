use crate::BundleEntry;

/// 交互选择的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Selected(BundleEntry),
    /// 输入 0、非数字、越界、选中目录或输入结束
    Aborted,
}

