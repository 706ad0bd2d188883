//! ユーザーが選択したファイルの集合

/// 1回のファイル選択で得た順序付きファイル一覧
///
/// 新しい選択のたびに丸ごと置き換える。要素の追加・削除はしない。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet<F> {
    files: Vec<F>,
}

impl<F> SelectionSet<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn first(&self) -> Option<&F> {
        self.files.first()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<F> Default for SelectionSet<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F> From<Vec<F>> for SelectionSet<F> {
    fn from(files: Vec<F>) -> Self {
        Self::new(files)
    }
}
