pub mod callbacks ; pub use callbacks :: * ; mod point ; pub use point :: * ; mod rect ; pub use rect :: * ; mod number ; pub use number :: * ; mod hooks ; pub use hooks :: * ; mod handle ; pub use handle :: * ;