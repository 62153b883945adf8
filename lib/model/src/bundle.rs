use crate::formats;
use gamesage_core::{
    Catalog, FoldInEngine, GameSage, LsiProjection, Result, TermVocabulary, TfIdfModel,
};
use gamesage_text::{StopwordList, TextNormalizer, WordNetLemmatizer};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub const CATALOG_FILE: &str = "game_lsa_vectors.tsv";
pub const STOPWORDS_FILE: &str = "stopwords.txt";
pub const PLATFORMS_FILE: &str = "multiword_platform_names.txt";
pub const VOCABULARY_FILE: &str = "term_ids.json";
pub const TFIDF_FILE: &str = "tfidf.json";
pub const LSI_FILE: &str = "lsi.json";
pub const LEMMA_LEXICON_FILE: &str = "lemma_lexicon.txt";
pub const LEMMA_EXCEPTIONS_FILE: &str = "lemma_exceptions.txt";

/// Location of every model file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub catalog: PathBuf,
    pub stopwords: PathBuf,
    pub platform_names: PathBuf,
    pub vocabulary: PathBuf,
    pub tfidf: PathBuf,
    pub lsi: PathBuf,
    /// Skipped when `None` or missing on disk
    pub lemma_lexicon: Option<PathBuf>,
    pub lemma_exceptions: Option<PathBuf>,
}

impl ModelPaths {
    /// Default file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            catalog: dir.join(CATALOG_FILE),
            stopwords: dir.join(STOPWORDS_FILE),
            platform_names: dir.join(PLATFORMS_FILE),
            vocabulary: dir.join(VOCABULARY_FILE),
            tfidf: dir.join(TFIDF_FILE),
            lsi: dir.join(LSI_FILE),
            lemma_lexicon: Some(dir.join(LEMMA_LEXICON_FILE)),
            lemma_exceptions: Some(dir.join(LEMMA_EXCEPTIONS_FILE)),
        }
    }
}

/// Everything needed to answer queries, loaded and validated
#[derive(Debug)]
pub struct ModelBundle {
    pub catalog: Catalog,
    pub stopwords: StopwordList,
    pub platform_names: Vec<String>,
    pub vocabulary: TermVocabulary,
    pub tfidf: TfIdfModel,
    pub projection: LsiProjection,
    pub lemmatizer: WordNetLemmatizer,
}

impl ModelBundle {
    pub fn load(paths: &ModelPaths) -> Result<Self> {
        let catalog = formats::read_catalog(open(&paths.catalog)?)?;
        let stopwords = StopwordList::new(formats::read_word_list(open(&paths.stopwords)?)?);
        let platform_names = formats::read_word_list(open(&paths.platform_names)?)?;
        let vocabulary = formats::read_vocabulary(open(&paths.vocabulary)?)?;
        let tfidf = formats::read_tfidf(open(&paths.tfidf)?)?;
        let projection = formats::read_lsi(open(&paths.lsi)?)?;

        let lexicon = match existing(&paths.lemma_lexicon) {
            Some(path) => formats::read_word_list(open(path)?)?,
            None => vocabulary.tokens().map(str::to_string).collect(),
        };
        let exceptions = match existing(&paths.lemma_exceptions) {
            Some(path) => formats::read_lemma_exceptions(open(path)?)?,
            None => Vec::new(),
        };
        let lemmatizer = WordNetLemmatizer::from_lexicon(lexicon).with_exceptions(exceptions);

        info!(
            games = catalog.len(),
            dim = catalog.dim(),
            "Loaded catalog from {}",
            paths.catalog.display()
        );
        info!(
            terms = vocabulary.len(),
            topics = projection.num_topics(),
            stopwords = stopwords.len(),
            platforms = platform_names.len(),
            lexicon = lemmatizer.lexicon_size(),
            exceptions = lemmatizer.exception_count(),
            "Loaded language models"
        );

        Ok(Self {
            catalog,
            stopwords,
            platform_names,
            vocabulary,
            tfidf,
            projection,
            lemmatizer,
        })
    }

    /// Wire the loaded parts into a query-ready `GameSage`
    pub fn into_sage(self) -> Result<GameSage> {
        let engine = FoldInEngine::new(self.vocabulary, self.tfidf, self.projection)?;
        let normalizer = TextNormalizer::builder()
            .titles(self.catalog.titles())
            .platform_names(self.platform_names)
            .stopwords(self.stopwords)
            .lemmatizer(Arc::new(self.lemmatizer))
            .build();

        GameSage::new(Arc::new(self.catalog), Arc::new(normalizer), Arc::new(engine))
    }
}

fn existing(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| p.exists())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamesage_core::Error;
    use std::fs;
    use tempfile::TempDir;

    fn write_model(dir: &Path) {
        fs::write(
            dir.join(CATALOG_FILE),
            "g1\tStar Fox\t1993\t0.2,1,0\n\
             g2\tF-Zero\t1990\t0.2,0,1\n\
             g3\tStar Fox 64\t1997\t0.2,0.9,0.1\n",
        )
        .unwrap();
        fs::write(dir.join(STOPWORDS_FILE), "the\nand\n").unwrap();
        fs::write(dir.join(PLATFORMS_FILE), "super nintendo\n").unwrap();
        fs::write(
            dir.join(VOCABULARY_FILE),
            r#"{"token2id": {"star_fox": 0, "racing": 1, "super_nintendo": 2, "ship": 3}}"#,
        )
        .unwrap();
        fs::write(
            dir.join(TFIDF_FILE),
            r#"{"num_docs": 4, "dfs": {"0": 1, "1": 1, "2": 2, "3": 1}}"#,
        )
        .unwrap();
        fs::write(
            dir.join(LSI_FILE),
            r#"{"num_terms": 4, "num_topics": 3,
                "u": [[0.2, 1, 0], [0.2, 0, 1], [0.2, 0, 0], [0.2, 0.5, 0]]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_and_answer() {
        let dir = TempDir::new().unwrap();
        write_model(dir.path());

        let bundle = ModelBundle::load(&ModelPaths::in_dir(dir.path())).unwrap();
        assert_eq!(bundle.catalog.len(), 3);
        assert_eq!(bundle.platform_names, vec!["super nintendo"]);
        // No lexicon file: vocabulary tokens stand in
        assert_eq!(bundle.lemmatizer.lexicon_size(), 4);
        assert_eq!(bundle.lemmatizer.exception_count(), 0);

        let sage = bundle.into_sage().unwrap();
        let answer = sage.answer_query("Star Fox and the ships").unwrap();
        assert_eq!(answer.normalized_text, "star_fox ship");
        assert_eq!(answer.most_related[0].id, "g1");
        assert_eq!(answer.least_related[0].id, "g2");
    }

    #[test]
    fn test_lemma_files_used_when_present() {
        let dir = TempDir::new().unwrap();
        write_model(dir.path());
        fs::write(dir.path().join(LEMMA_LEXICON_FILE), "ship\ngoose\n").unwrap();
        fs::write(dir.path().join(LEMMA_EXCEPTIONS_FILE), "geese goose\n").unwrap();

        let bundle = ModelBundle::load(&ModelPaths::in_dir(dir.path())).unwrap();
        assert_eq!(bundle.lemmatizer.lexicon_size(), 2);
        assert_eq!(bundle.lemmatizer.exception_count(), 1);
    }

    #[test]
    fn test_missing_required_file() {
        let dir = TempDir::new().unwrap();
        write_model(dir.path());
        fs::remove_file(dir.path().join(TFIDF_FILE)).unwrap();

        match ModelBundle::load(&ModelPaths::in_dir(dir.path())) {
            Err(Error::Io(e)) => assert!(e.to_string().contains(TFIDF_FILE)),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_catalog_fails_load() {
        let dir = TempDir::new().unwrap();
        write_model(dir.path());
        fs::write(
            dir.path().join(CATALOG_FILE),
            "g1\tStar Fox\t1993\t0.2,1,0\ng2\tF-Zero\t1990\n",
        )
        .unwrap();

        assert!(matches!(
            ModelBundle::load(&ModelPaths::in_dir(dir.path())),
            Err(Error::MalformedCatalogRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_catalog_and_model_dimensions_must_agree() {
        let dir = TempDir::new().unwrap();
        write_model(dir.path());
        fs::write(dir.path().join(CATALOG_FILE), "g1\tStar Fox\t1993\t0.2,1,0,0\n").unwrap();

        let bundle = ModelBundle::load(&ModelPaths::in_dir(dir.path())).unwrap();
        assert!(matches!(
            bundle.into_sage(),
            Err(Error::VectorShapeMismatch { expected: 3, actual: 2 })
        ));
    }
}
