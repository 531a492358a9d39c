# [allow (unused_imports)] use :: gi :: sys :: { AllocKind , ManagedPtr , RawPtr } ; # [allow (unused_imports)] use :: gi :: registry :: { ClassInfo , TypeKind } ; # [allow (unused_imports)] use :: gi :: obj :: { GiClass , StructType } ; # [doc = "Opaque struct `DemoHandle`. Instances only come from foreign code."] # [derive (Clone , Debug)] pub struct Handle { managed : ManagedPtr , } impl GiClass for Handle { const CLASS_INFO : & 'static ClassInfo = & ClassInfo :: new ("Handle" , TypeKind :: Struct) ; } impl StructType for Handle { const SIZE : usize = 0 ; const ALLOC : AllocKind = AllocKind :: Plain ; fn from_managed (managed : ManagedPtr) -> Self { Self { managed } } fn managed (& self) -> & ManagedPtr { & self . managed } }