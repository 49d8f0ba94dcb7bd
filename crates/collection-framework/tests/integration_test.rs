use async_trait::async_trait;
use collection_framework::{
    Access, CollectionActor, CollectionClient, CollectionEntity, Filter, FindQuery, Relation,
};

// --- Test Entities ---
// A shelf references books; reading a shelf with depth 1 expands them.

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: u32,
    owner: String,
    title: String,
}

#[derive(Debug)]
struct BookCreate {
    title: String,
}

#[derive(Debug)]
struct BookUpdate {
    title: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("Book error: {0}")]
struct BookError(String);

#[async_trait]
impl CollectionEntity for Book {
    type Id = u32;
    type Owner = String;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Context = ();
    type Error = BookError;

    const SLUG: &'static str = "books";

    fn from_create_params(id: u32, params: BookCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            owner: String::new(),
            title: params.title,
        })
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    fn owner(&self) -> Option<&String> {
        Some(&self.owner)
    }

    fn before_change(&mut self, requester: Option<&String>) -> Result<(), Self::Error> {
        match requester {
            Some(owner) => {
                self.owner = owner.clone();
                Ok(())
            }
            None => Err(BookError("owner required".into())),
        }
    }

    fn on_update(&mut self, update: BookUpdate) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    owner: String,
    books: Vec<Relation<Book>>,
}

#[derive(Debug)]
struct ShelfCreate {
    owner: String,
    books: Vec<u32>,
}

#[async_trait]
impl CollectionEntity for Shelf {
    type Id = u32;
    type Owner = String;
    type Create = ShelfCreate;
    type Update = ();
    type Context = CollectionClient<Book>;
    type Error = BookError;

    const SLUG: &'static str = "shelves";

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            owner: params.owner,
            books: params.books.into_iter().map(Relation::Id).collect(),
        })
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    fn owner(&self) -> Option<&String> {
        Some(&self.owner)
    }

    fn on_update(&mut self, _: ()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn populate(&mut self, depth: u8, books: &CollectionClient<Book>) -> Result<(), Self::Error> {
        for relation in self.books.iter_mut() {
            let id = *relation.id();
            let found = books
                .get(id, depth - 1)
                .await
                .map_err(|e| BookError(e.to_string()))?;
            if let Some(book) = found {
                *relation = book.into();
            }
        }
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (actor, client) = CollectionActor::<Book>::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create(BookCreate { title: "Dune".into() }, Some("ann".into()))
        .await
        .unwrap();
    assert_eq!(id, 1);

    let updated = client
        .update(id, BookUpdate { title: Some("Dune Messiah".into()) }, Some("bob".into()))
        .await
        .unwrap();
    assert_eq!(updated.title, "Dune Messiah");
    // before_change runs on update too
    assert_eq!(updated.owner, "bob");

    client.delete(id).await.unwrap();
    assert!(client.get(id, 0).await.unwrap().is_none());
}

#[tokio::test]
async fn test_expansion_follows_depth() {
    let (book_actor, books) = CollectionActor::<Book>::new(10);
    let (shelf_actor, shelves) = CollectionActor::<Shelf>::new(10);
    tokio::spawn(book_actor.run(()));
    tokio::spawn(shelf_actor.run(books.clone()));

    let dune = books
        .create(BookCreate { title: "Dune".into() }, Some("ann".into()))
        .await
        .unwrap();
    let emma = books
        .create(BookCreate { title: "Emma".into() }, Some("ann".into()))
        .await
        .unwrap();
    let shelf = shelves
        .create(
            ShelfCreate {
                owner: "ann".into(),
                books: vec![dune, emma, 404],
            },
            Some("ann".into()),
        )
        .await
        .unwrap();

    let flat = shelves.get(shelf, 0).await.unwrap().unwrap();
    assert!(flat.books.iter().all(|b| !b.is_expanded()));

    let expanded = shelves.get(shelf, 1).await.unwrap().unwrap();
    assert_eq!(expanded.books[0].expanded().map(|b| b.title.as_str()), Some("Dune"));
    assert_eq!(expanded.books[1].expanded().map(|b| b.title.as_str()), Some("Emma"));
    // A reference to a missing document stays a bare id.
    assert_eq!(expanded.books[2], Relation::Id(404));

    // Stored documents are never expanded in place.
    let again = shelves.get(shelf, 0).await.unwrap().unwrap();
    assert!(!again.books[0].is_expanded());

    let found = shelves
        .find(FindQuery::all().owned_by("ann".to_string()).depth(1))
        .await
        .unwrap();
    assert_eq!(found.total_docs, 1);
    assert!(found.docs[0].books[0].is_expanded());
}

#[tokio::test]
async fn test_access_restricts_find() {
    let (actor, client) = CollectionActor::<Book>::new(10);
    tokio::spawn(actor.run(()));

    for title in ["a", "b", "c"] {
        client
            .create(BookCreate { title: title.into() }, Some("ann".into()))
            .await
            .unwrap();
    }

    let access = Access::Where(Filter::IdIn(vec![3, 1, 3]));
    let query = FindQuery::all().restricted_by(&access).unwrap();
    let found = client.find(query).await.unwrap();
    let titles: Vec<&str> = found.docs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);

    assert!(FindQuery::<Book>::all().restricted_by(&Access::Denied).is_none());

    let all = FindQuery::all().restricted_by(&Access::Granted).unwrap();
    assert_eq!(client.find(all).await.unwrap().total_docs, 3);
}
